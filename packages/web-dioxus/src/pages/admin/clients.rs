//! Admin clients pages

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Client;

/// Admin clients list page
#[component]
pub fn AdminClients() -> Element {
    let clients = use_server_future(fetch_clients)?;

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Clients" }

            match clients.value().as_ref() {
                Some(Ok(clients)) if !clients.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Name" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Contact" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Category" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Contracts" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for client in clients.iter() {
                                    ClientRow { client: client.clone() }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No clients found." }
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
struct ClientRowProps {
    client: Client,
}

#[component]
fn ClientRow(props: ClientRowProps) -> Element {
    let client = &props.client;

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4",
                Link {
                    to: Route::AdminClientDetail { id: client.id.clone() },
                    class: "text-indigo-600 hover:text-indigo-700 font-medium",
                    "{client.name}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                {client.contact_email.clone().unwrap_or_else(|| "\u{2014}".to_string())}
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                {client.category.clone().unwrap_or_else(|| "\u{2014}".to_string())}
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{client.active_contracts.unwrap_or(0)}"
            }
        }
    }
}

/// Admin client detail page
#[component]
pub fn AdminClientDetail(id: String) -> Element {
    let client = use_server_future(move || fetch_client(id.clone()))?;

    rsx! {
        div {
            Link {
                to: Route::AdminClients {},
                class: "text-sm text-indigo-600 hover:text-indigo-700",
                "\u{2190} Back to clients"
            }

            match client.value().as_ref() {
                Some(Ok(Some(client))) => rsx! {
                    ClientCard { client: client.clone() }
                },
                Some(Ok(None)) => rsx! {
                    div {
                        class: "mt-4 bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "Client not found." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "mt-4 bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
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
struct ClientCardProps {
    client: Client,
}

#[component]
fn ClientCard(props: ClientCardProps) -> Element {
    let client = &props.client;

    rsx! {
        div {
            class: "mt-4 bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h1 { class: "text-2xl font-bold text-gray-900", "{client.name}" }
            if let Some(category) = &client.category {
                span {
                    class: "mt-1 inline-block px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                    "{category}"
                }
            }

            dl {
                class: "mt-6 grid grid-cols-1 md:grid-cols-2 gap-4",
                DetailField {
                    label: "Contact email",
                    value: client.contact_email.clone().unwrap_or_else(|| "\u{2014}".to_string()),
                }
                DetailField {
                    label: "Phone",
                    value: client.phone.clone().unwrap_or_else(|| "\u{2014}".to_string()),
                }
                DetailField {
                    label: "Active contracts",
                    value: client.active_contracts.unwrap_or(0).to_string(),
                }
                DetailField {
                    label: "Client since",
                    value: client.created_at.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DetailFieldProps {
    label: &'static str,
    value: String,
}

#[component]
fn DetailField(props: DetailFieldProps) -> Element {
    rsx! {
        div {
            dt { class: "text-xs font-medium text-gray-500 uppercase", "{props.label}" }
            dd { class: "mt-1 text-sm text-gray-900", "{props.value}" }
        }
    }
}

#[server]
async fn fetch_clients() -> Result<Vec<Client>, ServerFnError> {
    use crate::graphql::GET_CLIENTS;
    use crate::types::GetClientsResponse;

    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        limit: i32,
    }

    let response: GetClientsResponse = client
        .query(GET_CLIENTS, Some(Variables { limit: 100 }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.clients)
}

#[server]
async fn fetch_client(id: String) -> Result<Option<Client>, ServerFnError> {
    use crate::graphql::GET_CLIENT;
    use crate::types::GetClientResponse;

    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
    }

    let response: GetClientResponse = client
        .query(GET_CLIENT, Some(Variables { id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.client)
}
