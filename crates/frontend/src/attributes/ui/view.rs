use contracts::attributes::{Field, CATEGORIES};
use leptos::prelude::*;

use super::view_model::AttributeFormViewModel;
use crate::attributes::state::ValidationOutcome;

#[component]
pub fn AttributeEntryForm() -> impl IntoView {
    let vm = AttributeFormViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Never let the browser navigate; validation is in-page.
        ev.prevent_default();
        vm.validate_command();
    };

    view! {
        <form class="attribute-form" on:submit=on_submit>
            <div class="form-group">
                <label for="category_id">"Category"</label>
                <select
                    id="category_id"
                    name="category_id"
                    class="category_dropdown"
                    on:change=move |ev| vm.category_changed(event_target_value(&ev))
                >
                    {CATEGORIES
                        .into_iter()
                        .map(|category| {
                            let id = category.id;
                            view! {
                                <option
                                    value=id
                                    selected=move || vm.values.with(|v| v.category_id == id)
                                >
                                    {category.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            {Field::ALL
                .into_iter()
                .map(|field| view! { <FieldInput field vm /> })
                .collect_view()}

            <button
                type="submit"
                id="data-validation-btn"
                class="btn btn-primary"
                disabled=move || vm.is_validating.get()
            >
                {move || if vm.is_validating.get() { "Validating..." } else { "Validate values" }}
            </button>
        </form>

        <Show when=move || vm.error.get().is_some()>
            <div class="error-message">
                {move || vm.error.get().unwrap_or_default()}
            </div>
        </Show>

        <Show when=move || matches!(vm.outcome.get(), Some(ValidationOutcome::Outliers(_)))>
            <div id="unusual_value_hint" class="validation-panel validation-panel--warning">
                <p>"Some of the entered values look unusual:"</p>
                <ul id="unusual_value_list">
                    {move || match vm.outcome.get() {
                        Some(ValidationOutcome::Outliers(hints)) => hints
                            .into_iter()
                            .map(|hint| {
                                view! { <li class="possible_outlier">{hint.message()}</li> }
                            })
                            .collect_view()
                            .into_any(),
                        _ => ().into_any(),
                    }}
                </ul>
            </div>
        </Show>

        <Show when=move || vm.outcome.get() == Some(ValidationOutcome::AllValid)>
            <div id="all_data_valid" class="validation-panel validation-panel--ok">
                "All entered values look plausible."
            </div>
        </Show>
    }
}

/// One numeric input, wrapped in its `<key>_input` visibility container.
#[component]
fn FieldInput(field: Field, vm: AttributeFormViewModel) -> impl IntoView {
    let key = field.key();

    view! {
        <div
            class=format!("form-group {}_input", key)
            style:display=move || {
                if vm.visibility.get().is_visible(field) { "" } else { "none" }
            }
        >
            <label for=key>{field.label()}</label>
            <input
                type="text"
                inputmode="decimal"
                id=key
                name=key
                prop:value=move || vm.values.with(|v| v.value(field).to_string())
                on:input=move |ev| {
                    vm.values.update(|v| v.set_value(field, event_target_value(&ev)));
                }
            />
        </div>
    }
}
