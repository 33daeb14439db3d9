//! Static "About Us" page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about">
            <h2>"About Us"</h2>
            <div class="about__card">
                <p>
                    "Know-Your-Neighborhood is a community-focused platform designed to \
                     connect residents, share local updates, and foster a sense of belonging."
                </p>
                <h3>"Our Mission"</h3>
                <p>
                    "To empower communities by providing a secure and user-friendly platform \
                     for interaction and information sharing."
                </p>
                <h3>"Our Team"</h3>
                <p>
                    "We are a group of passionate developers and community advocates working \
                     to make neighborhoods more connected."
                </p>
                <h3>"Why Choose Us?"</h3>
                <ul>
                    <li>"Secure login with Google OAuth2 integration."</li>
                    <li>"Easy-to-use interface built with modern web technologies."</li>
                    <li>"Committed to user privacy and data security."</li>
                </ul>
            </div>
        </div>
    }
}
