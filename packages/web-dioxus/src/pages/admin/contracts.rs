//! Admin contracts page

use dioxus::prelude::*;

use crate::types::{Contract, ContractStatus};

/// Admin contracts list page
#[component]
pub fn AdminContracts() -> Element {
    let contracts = use_server_future(fetch_contracts)?;

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Contracts" }

            match contracts.value().as_ref() {
                Some(Ok(contracts)) if !contracts.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                class: "bg-gray-50",
                                tr {
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Title" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Client" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Period" }
                                }
                            }
                            tbody {
                                class: "bg-white divide-y divide-gray-200",
                                for contract in contracts.iter() {
                                    ContractRow { contract: contract.clone() }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No contracts found." }
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
struct ContractRowProps {
    contract: Contract,
}

#[component]
fn ContractRow(props: ContractRowProps) -> Element {
    let contract = &props.contract;

    let status_class = match contract.status {
        ContractStatus::Draft => "bg-gray-100 text-gray-700",
        ContractStatus::Active => "bg-green-100 text-green-700",
        ContractStatus::Expired => "bg-amber-100 text-amber-700",
        ContractStatus::Terminated => "bg-red-100 text-red-700",
    };

    let period = match (&contract.starts_at, &contract.ends_at) {
        (Some(start), Some(end)) => format!("{start} \u{2013} {end}"),
        (Some(start), None) => format!("from {start}"),
        _ => "\u{2014}".to_string(),
    };

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td {
                class: "px-6 py-4 font-medium text-gray-900",
                "{contract.title}"
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{contract.client_name}"
            }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{contract.status:?}"
                }
            }
            td {
                class: "px-6 py-4 text-sm text-gray-500",
                "{period}"
            }
        }
    }
}

#[server]
async fn fetch_contracts() -> Result<Vec<Contract>, ServerFnError> {
    use crate::graphql::GET_CONTRACTS;
    use crate::types::GetContractsResponse;

    let client = crate::graphql::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        limit: i32,
    }

    let response: GetContractsResponse = client
        .query(GET_CONTRACTS, Some(Variables { limit: 100 }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.contracts)
}
