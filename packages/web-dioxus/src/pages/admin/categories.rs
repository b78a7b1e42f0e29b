//! Admin categories page

use dioxus::prelude::*;

use crate::types::Category;

/// Admin categories list page
#[component]
pub fn AdminCategories() -> Element {
    let categories = use_server_future(fetch_categories)?;

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Categories" }

            match categories.value().as_ref() {
                Some(Ok(categories)) if !categories.is_empty() => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for category in categories.iter() {
                            CategoryCard { category: category.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No categories found." }
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
struct CategoryCardProps {
    category: Category,
}

#[component]
fn CategoryCard(props: CategoryCardProps) -> Element {
    let category = &props.category;

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900", "{category.name}" }
            if let Some(description) = &category.description {
                p { class: "mt-1 text-sm text-gray-600", "{description}" }
            }
            if let Some(subcategories) = &category.subcategories {
                div {
                    class: "mt-3 flex flex-wrap gap-1",
                    for sub in subcategories.iter() {
                        span {
                            class: "px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                            "{sub.name}"
                        }
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::graphql::GET_CATEGORIES;
    use crate::types::GetCategoriesResponse;

    let client = crate::graphql::server_client();

    let response: GetCategoriesResponse = client
        .query::<(), GetCategoriesResponse>(GET_CATEGORIES, None)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.categories)
}
