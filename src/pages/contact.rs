//! Contact page.
//!
//! The server has no contact endpoint, so submission stays client-side:
//! validate, log, and confirm inline.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

fn validate_contact_input(name: &str, email: &str, message: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err("Fill in name, email, and message.".to_owned());
    }
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let message_value = message.get();
        if let Err(problem) = validate_contact_input(&name_value, &email_value, &message_value) {
            status.set(problem);
            return;
        }
        leptos::logging::log!("contact form submitted by {}", email_value.trim());
        status.set("Message submitted! (Placeholder action)".to_owned());
    };

    view! {
        <div class="contact">
            <h2>"Contact Us"</h2>
            <Show when=move || !status.get().is_empty()>
                <p class="contact__status">{move || status.get()}</p>
            </Show>
            <form class="contact__form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button type="submit">"Send Message"</button>
            </form>
            <div class="contact__info">
                <p>"Email: support@kyn-app.com"</p>
                <p>"Phone: +60 123-456-789"</p>
            </div>
        </div>
    }
}
