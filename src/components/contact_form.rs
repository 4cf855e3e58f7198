//! Contact Form Component
//!
//! Six validated inputs; the submit button stays disabled until every field
//! passes. There is no submit handler.

use leptos::prelude::*;

use mealdb_core::ContactField;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(mealdb_core::ContactForm::default());
    let invalid = Memo::new(move |_| form.with(|f| f.invalid_fields()));
    let can_submit = Memo::new(move |_| invalid.with(|fields| fields.is_empty()));

    let input_class = move |field: ContactField| {
        // Only flag fields the user has started typing in
        let typed = form.with(|f| !f.value(field).is_empty());
        let flagged = typed && invalid.with(|fields| fields.contains(&field));
        if flagged {
            "form-control custom mb-2 is-invalid"
        } else {
            "form-control custom mb-2"
        }
    };

    view! {
        <h2 class="mb-3">"Contact / Sign up"</h2>
        <div style="max-width:720px">
            {ContactField::ALL.into_iter().map(|field| {
                view! {
                    <input
                        id=field.id()
                        type={if field.is_secret() { "password" } else { "text" }}
                        class=move || input_class(field)
                        placeholder=field.placeholder()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.set(field, value);
                            });
                        }
                    />
                }
            }).collect_view()}
            <button
                id="c_submit"
                class=move || if can_submit.get() { "btn btn-danger" } else { "btn btn-danger btn-disabled" }
                disabled=move || !can_submit.get()
            >
                "Submit"
            </button>
        </div>
    }
}
