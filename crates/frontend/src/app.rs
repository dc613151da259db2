use leptos::prelude::*;

use crate::attributes::ui::AttributeEntryForm;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <header class="page__header">
                <h1>"Product data entry"</h1>
                <p class="page__subtitle">
                    "Enter the numeric attributes of the item and validate them against historic data."
                </p>
            </header>
            <AttributeEntryForm />
        </main>
    }
}
