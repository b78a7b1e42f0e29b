//! Discovery review table, tabs, pagination, and the users dialog
//!
//! Presentational only: every interaction is forwarded up as an event and
//! lands in the workflow store via the page's `DiscoveryState`.

use dioxus::prelude::*;

use discovery::{DiscoveredItem, SourceTag, Tab};

// ============================================================================
// Tabs
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DiscoveryTabsProps {
    pub active: Tab,
    pub awaiting_count: usize,
    pub ignored_count: usize,
    pub on_select: EventHandler<Tab>,
}

/// Awaiting/Ignored tab bar with count badges
#[component]
pub fn DiscoveryTabs(props: DiscoveryTabsProps) -> Element {
    rsx! {
        div {
            class: "flex gap-1 border-b border-gray-200 mb-4",
            for tab in Tab::variants().iter().copied() {
                button {
                    class: if tab == props.active {
                        "px-4 py-2 text-sm font-medium border-b-2 border-indigo-600 text-indigo-700"
                    } else {
                        "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
                    },
                    onclick: move |_| props.on_select.call(tab),
                    "{tab.label()}"
                    span {
                        class: "ml-2 px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                        {
                            match tab {
                                Tab::Awaiting => props.awaiting_count.to_string(),
                                Tab::Ignored => props.ignored_count.to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Table
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct DiscoveryTableProps {
    pub items: Vec<DiscoveredItem>,
    pub tab: Tab,
    pub on_approve: EventHandler<String>,
    pub on_ignore: EventHandler<String>,
    pub on_restore: EventHandler<String>,
    pub on_view_users: EventHandler<String>,
}

/// One page of the active partition
#[component]
pub fn DiscoveryTable(props: DiscoveryTableProps) -> Element {
    if props.items.is_empty() {
        return rsx! {
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                p { class: "text-gray-500", "No discoveries here." }
            }
        };
    }

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
            table {
                class: "min-w-full divide-y divide-gray-200",
                thead {
                    class: "bg-gray-50",
                    tr {
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Application" }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Sources" }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Users" }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Last Used" }
                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                    }
                }
                tbody {
                    class: "bg-white divide-y divide-gray-200",
                    for item in props.items.iter() {
                        DiscoveryRow {
                            key: "{item.id}",
                            item: item.clone(),
                            tab: props.tab,
                            on_approve: props.on_approve,
                            on_ignore: props.on_ignore,
                            on_restore: props.on_restore,
                            on_view_users: props.on_view_users,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DiscoveryRowProps {
    item: DiscoveredItem,
    tab: Tab,
    on_approve: EventHandler<String>,
    on_ignore: EventHandler<String>,
    on_restore: EventHandler<String>,
    on_view_users: EventHandler<String>,
}

#[component]
fn DiscoveryRow(props: DiscoveryRowProps) -> Element {
    let item = &props.item;
    let id = item.id.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 font-medium text-gray-900",
                "{item.name}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-1",
                    for tag in item.sources.iter().copied() {
                        SourceBadge { tag }
                    }
                }
            }
            td {
                class: "px-6 py-4",
                button {
                    class: "text-sm text-indigo-600 hover:text-indigo-700",
                    onclick: {
                        let id = id.clone();
                        move |_| props.on_view_users.call(id.clone())
                    },
                    "{item.users.len()} users"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{item.last_used}"
            }
            td {
                class: "px-6 py-4",
                div {
                    class: "flex gap-2",
                    if props.tab == Tab::Awaiting {
                        button {
                            class: "px-2 py-1 bg-green-100 text-green-700 text-xs rounded hover:bg-green-200",
                            onclick: {
                                let id = id.clone();
                                move |_| props.on_approve.call(id.clone())
                            },
                            "Approve"
                        }
                        button {
                            class: "px-2 py-1 bg-gray-100 text-gray-700 text-xs rounded hover:bg-gray-200",
                            onclick: {
                                let id = id.clone();
                                move |_| props.on_ignore.call(id.clone())
                            },
                            "Ignore"
                        }
                    }
                    if props.tab == Tab::Ignored {
                        button {
                            class: "px-2 py-1 bg-blue-100 text-blue-700 text-xs rounded hover:bg-blue-200",
                            onclick: {
                                let id = id.clone();
                                move |_| props.on_restore.call(id.clone())
                            },
                            "Restore"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SourceBadgeProps {
    tag: SourceTag,
}

#[component]
fn SourceBadge(props: SourceBadgeProps) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-1 px-2 py-0.5 rounded text-xs bg-gray-100 text-gray-700",
            title: "{props.tag.label()}",
            span { "{props.tag.icon()}" }
            "{props.tag.label()}"
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PaginationControlsProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: EventHandler<usize>,
}

/// Previous/Next page controls.
///
/// Renders nothing at all for an empty partition (`total_pages == 0`),
/// never "page 1 of 0".
#[component]
pub fn PaginationControls(props: PaginationControlsProps) -> Element {
    if props.total_pages == 0 {
        return rsx! {};
    }

    let at_first = props.current_page <= 1;
    let at_last = props.current_page >= props.total_pages;

    rsx! {
        div {
            class: "flex items-center justify-between mt-4",
            button {
                class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: at_first,
                onclick: move |_| props.on_page_change.call(props.current_page - 1),
                "Previous"
            }
            span {
                class: "text-sm text-gray-600",
                "Page {props.current_page} of {props.total_pages}"
            }
            button {
                class: "px-3 py-1.5 text-sm rounded border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: at_last,
                onclick: move |_| props.on_page_change.call(props.current_page + 1),
                "Next"
            }
        }
    }
}

// ============================================================================
// Users dialog
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct UsersDialogProps {
    pub item: DiscoveredItem,
    pub on_close: EventHandler<()>,
}

/// Modal listing the users behind a discovery
#[component]
pub fn UsersDialog(props: UsersDialogProps) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-50",
            onclick: move |_| props.on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-xl max-w-md w-full mx-4",
                // Keep clicks inside the dialog from closing it
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-gray-200",
                    h2 { class: "text-lg font-semibold text-gray-900", "Users of {props.item.name}" }
                    button {
                        class: "text-gray-400 hover:text-gray-600",
                        onclick: move |_| props.on_close.call(()),
                        "\u{2715}"
                    }
                }

                div {
                    class: "px-6 py-4 max-h-96 overflow-y-auto",
                    if props.item.users.is_empty() {
                        p { class: "text-sm text-gray-500", "No user activity recorded." }
                    }
                    for user in props.item.users.iter() {
                        div {
                            class: "flex items-center justify-between py-2 border-b border-gray-100 last:border-0",
                            span { class: "text-sm text-gray-900", "{user.email}" }
                            span {
                                class: "text-xs text-gray-500",
                                if user.count == 1 { "1 usage" } else { "{user.count} usages" }
                            }
                        }
                    }
                }
            }
        }
    }
}
