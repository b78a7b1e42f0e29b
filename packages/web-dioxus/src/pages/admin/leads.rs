//! Admin leads page

use dioxus::prelude::*;

use crate::types::{Lead, LeadStatus};

/// Admin leads list page
#[component]
pub fn AdminLeads() -> Element {
    let leads = use_server_future(fetch_leads)?;

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Leads" }

            match leads.value().as_ref() {
                Some(Ok(leads)) if !leads.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Email" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Source" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Actions" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for lead in leads.iter() {
                                    LeadRow { lead: lead.clone() }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No leads found." }
                    }
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
struct LeadRowProps {
    lead: Lead,
}

#[component]
fn LeadRow(props: LeadRowProps) -> Element {
    let lead = &props.lead;

    let status_class = match lead.status {
        LeadStatus::New => "bg-blue-100 text-blue-700",
        LeadStatus::Contacted => "bg-amber-100 text-amber-700",
        LeadStatus::Qualified => "bg-green-100 text-green-700",
        LeadStatus::Converted => "bg-indigo-100 text-indigo-700",
        LeadStatus::Lost => "bg-gray-100 text-gray-700",
    };

    let handle_contacted = {
        let id = lead.id.clone();
        move |_| {
            let id = id.clone();
            spawn(async move {
                let _ = update_lead_status(id, LeadStatus::Contacted).await;
            });
        }
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 font-medium text-gray-900",
                "{lead.name}"
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                {lead.email.clone().unwrap_or_else(|| "\u{2014}".to_string())}
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{lead.status.label()}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                {lead.source.clone().unwrap_or_else(|| "\u{2014}".to_string())}
            }
            td {
                class: "px-6 py-4",
                if lead.status == LeadStatus::New {
                    button {
                        class: "px-2 py-1 bg-amber-100 text-amber-700 text-xs rounded hover:bg-amber-200",
                        onclick: handle_contacted,
                        "Mark Contacted"
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_leads() -> Result<Vec<Lead>, ServerFnError> {
    use crate::graphql::GET_LEADS;
    use crate::types::GetLeadsResponse;

    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        limit: i32,
    }

    let response: GetLeadsResponse = client
        .query(GET_LEADS, Some(Variables { limit: 100 }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.leads)
}

#[server]
async fn update_lead_status(lead_id: String, status: LeadStatus) -> Result<(), ServerFnError> {
    use crate::graphql::UPDATE_LEAD_STATUS;

    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        lead_id: String,
        status: LeadStatus,
    }

    let _: serde_json::Value = client
        .mutate(UPDATE_LEAD_STATUS, Some(Variables { lead_id, status }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}
