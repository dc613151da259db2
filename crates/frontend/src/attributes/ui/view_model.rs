use leptos::prelude::*;

use crate::attributes::api;
use crate::attributes::state::{
    apply_category, complete_request, AttributeValues, FieldVisibility, RequestCompletion,
    ValidationOutcome,
};

/// ViewModel for the attribute entry form.
#[derive(Clone, Copy)]
pub struct AttributeFormViewModel {
    pub values: RwSignal<AttributeValues>,
    pub visibility: RwSignal<FieldVisibility>,
    pub outcome: RwSignal<Option<ValidationOutcome>>,
    pub error: RwSignal<Option<String>>,
    pub is_validating: RwSignal<bool>,
    /// Request generation; a completion belonging to an older
    /// generation is dropped instead of overwriting newer state.
    generation: RwSignal<u64>,
}

impl AttributeFormViewModel {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(AttributeValues::default()),
            visibility: RwSignal::new(FieldVisibility::default()),
            outcome: RwSignal::new(None),
            error: RwSignal::new(None),
            is_validating: RwSignal::new(false),
            generation: RwSignal::new(0),
        }
    }

    /// React to the category dropdown changing.
    ///
    /// Unknown identifiers leave the visible field set as it is.
    pub fn category_changed(&self, category_id: String) {
        self.visibility
            .update(|v| *v = apply_category(*v, &category_id));
        self.values.update(|v| v.category_id = category_id);
    }

    /// Submit the current values for validation.
    pub fn validate_command(&self) {
        let query = self.values.get_untracked().to_query();

        let my_generation = self.generation.get_untracked() + 1;
        self.generation.set(my_generation);
        self.outcome.set(None);
        self.error.set(None);
        self.is_validating.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::validate(&query).await;

            let completion =
                complete_request(vm.generation.get_untracked(), my_generation, result);
            match completion {
                // A newer request was issued while this one was in flight.
                None => return,
                Some(RequestCompletion::Outcome(outcome)) => vm.outcome.set(Some(outcome)),
                Some(RequestCompletion::Failed(message)) => {
                    log::error!("{}", message);
                    vm.error.set(Some(message));
                }
            }
            vm.is_validating.set(false);
        });
    }
}

impl Default for AttributeFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
