//! Page footer with the copyright line and terms link.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copyright">"© 2025 Know-Your-Neighborhood. All rights reserved."</p>
            <ul class="footer__links">
                <li>
                    <a href="/terms">"Terms and Conditions"</a>
                </li>
            </ul>
        </footer>
    }
}
