//! Static "Terms and Conditions" page.

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="terms">
            <h2>"Terms and Conditions"</h2>
            <div class="terms__card">
                <h3>"1. Introduction"</h3>
                <p>
                    "Welcome to Know-Your-Neighborhood. By accessing or using our website, \
                     you agree to comply with and be bound by the following terms and \
                     conditions."
                </p>
                <h3>"2. User Responsibilities"</h3>
                <p>
                    "Users must provide accurate information during registration and login. \
                     You are responsible for maintaining the confidentiality of your account \
                     credentials."
                </p>
                <h3>"3. Privacy Policy"</h3>
                <p>
                    "Your data is handled in accordance with our Privacy Policy, which \
                     outlines how we collect, use, and protect your information."
                </p>
                <h3>"4. Limitation of Liability"</h3>
                <p>
                    "Know-Your-Neighborhood is not liable for any damages arising from the \
                     use of this website or third-party APIs integrated with it."
                </p>
                <p>"For the full terms, please contact our support team."</p>
            </div>
        </div>
    }
}
