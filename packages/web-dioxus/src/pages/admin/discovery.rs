//! Discovery review page
//!
//! Loads the discovered-application feed once, then runs the whole review
//! workflow (tabs, pagination, approve/ignore/restore, users dialog) against
//! the session-local store. Review actions here do not write back to the
//! API; approval is a local triage stage.

use dioxus::prelude::*;

use discovery::{DiscoveredItem, SourceTag, Tab};

use crate::components::{DiscoveryTable, DiscoveryTabs, PaginationControls, UsersDialog};
use crate::state::use_discovery_state;

/// Admin discovery review page
#[component]
pub fn AdminDiscovery() -> Element {
    let discoveries = use_server_future(fetch_discoveries)?;

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Discovery" }

            match discoveries.value().as_ref() {
                Some(Ok(items)) => rsx! {
                    DiscoveryWorkflow { items: items.clone() }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DiscoveryWorkflowProps {
    items: Vec<DiscoveredItem>,
}

#[component]
fn DiscoveryWorkflow(props: DiscoveryWorkflowProps) -> Element {
    let mut state = use_discovery_state(props.items.clone());

    let stats = state.source_stats();
    let page_items = state.page_items();
    let tab = state.tab();
    let selected = state.selected_item();

    rsx! {
        // Per-source discovery volume (full feed, not the filtered view)
        div {
            class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-6",
            for tag in SourceTag::variants().iter().copied() {
                SourceStatCard { tag, value: stats.count(tag) }
            }
        }

        DiscoveryTabs {
            active: tab,
            awaiting_count: state.tab_count(Tab::Awaiting),
            ignored_count: state.tab_count(Tab::Ignored),
            on_select: move |t| state.set_tab(t),
        }

        DiscoveryTable {
            items: page_items,
            tab,
            on_approve: move |id: String| state.approve(&id),
            on_ignore: move |id: String| state.ignore(&id),
            on_restore: move |id: String| state.restore(&id),
            on_view_users: move |id: String| state.select_for_detail(&id),
        }

        PaginationControls {
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            on_page_change: move |page| state.set_page(page),
        }

        if let Some(item) = selected {
            if state.is_detail_open() {
                UsersDialog {
                    item,
                    on_close: move |_| state.close_detail(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SourceStatCardProps {
    tag: SourceTag,
    value: usize,
}

#[component]
fn SourceStatCard(props: SourceStatCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.tag.label()}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full bg-indigo-50 text-indigo-700 flex items-center justify-center text-2xl",
                    "{props.tag.icon()}"
                }
            }
        }
    }
}

#[server]
async fn fetch_discoveries() -> Result<Vec<DiscoveredItem>, ServerFnError> {
    use crate::graphql::GET_DISCOVERIES;
    use crate::types::GetDiscoveriesResponse;

    let client = crate::graphql::server_client();

    let response: GetDiscoveriesResponse = client
        .query::<(), GetDiscoveriesResponse>(GET_DISCOVERIES, None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Validate at the boundary; malformed records are logged and skipped so
    // one bad row never takes down the whole review queue
    let items = response
        .discoveries
        .into_iter()
        .filter_map(|dto| match dto.into_item() {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("skipping invalid discovery record: {e}");
                None
            }
        })
        .collect();

    Ok(items)
}
