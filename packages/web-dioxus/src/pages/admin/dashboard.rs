//! Admin dashboard page

use dioxus::prelude::*;

use crate::graphql::GET_ADMIN_STATS;
use crate::routes::Route;
use crate::types::{ContractStatus, LeadStatus};

/// Admin dashboard with stats overview
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(fetch_admin_stats)?;

    let overview = match stats.value().as_ref() {
        Some(Ok(s)) => s.clone(),
        _ => Overview::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

                StatCard {
                    title: "Clients",
                    value: overview.clients,
                    icon: "\u{1F4BC}",
                    color: "blue"
                }
                StatCard {
                    title: "Open Leads",
                    value: overview.open_leads,
                    icon: "\u{1F4C8}",
                    color: "amber"
                }
                StatCard {
                    title: "Active Contracts",
                    value: overview.active_contracts,
                    icon: "\u{1F4DC}",
                    color: "green"
                }
                StatCard {
                    title: "Discoveries",
                    value: overview.discoveries,
                    icon: "\u{1F50D}",
                    color: "orange"
                }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::AdminDiscovery {},
                        label: "Review Discoveries",
                        icon: "\u{1F50D}"
                    }
                    QuickActionLink {
                        to: Route::AdminLeads {},
                        label: "Work Leads",
                        icon: "\u{1F4C8}"
                    }
                    QuickActionLink {
                        to: Route::AdminClients {},
                        label: "Manage Clients",
                        icon: "\u{1F4BC}"
                    }
                    QuickActionLink {
                        to: Route::AdminContracts {},
                        label: "View Contracts",
                        icon: "\u{1F4DC}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
struct Overview {
    clients: i32,
    open_leads: i32,
    active_contracts: i32,
    discoveries: i32,
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: i32,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "amber" => "bg-amber-50",
        "green" => "bg-green-50",
        "orange" => "bg-orange-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "amber" => "text-amber-700",
        "green" => "text-green-700",
        "orange" => "text-orange-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}

#[server]
async fn fetch_admin_stats() -> Result<Overview, ServerFnError> {
    let client = crate::graphql::server_client();

    #[derive(serde::Deserialize)]
    struct Id {
        id: String,
    }

    #[derive(serde::Deserialize)]
    struct LeadRow {
        id: String,
        status: LeadStatus,
    }

    #[derive(serde::Deserialize)]
    struct ContractRow {
        id: String,
        status: ContractStatus,
    }

    #[derive(serde::Deserialize)]
    struct Response {
        clients: Vec<Id>,
        leads: Vec<LeadRow>,
        contracts: Vec<ContractRow>,
        discoveries: Vec<Id>,
    }

    let response: Response = client
        .query::<(), Response>(GET_ADMIN_STATS, None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(Overview {
        clients: response.clients.len() as i32,
        open_leads: response
            .leads
            .iter()
            .filter(|l| !matches!(l.status, LeadStatus::Converted | LeadStatus::Lost))
            .count() as i32,
        active_contracts: response
            .contracts
            .iter()
            .filter(|c| c.status == ContractStatus::Active)
            .count() as i32,
        discoveries: response.discoveries.len() as i32,
    })
}
