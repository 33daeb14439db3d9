//! Root application component: routes, layout chrome, and the session
//! context every page reads.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::net::identity::SessionStore;
use crate::pages::{
    about::AboutPage, auth_callback::AuthCallbackPage, contact::ContactPage,
    forum_post::ForumPostPage, forums::ForumsPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, terms::TermsPage,
};

/// HTML document shell the server renders around the app for hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context and sets up client-side routing. The
/// startup session resolution begins here, once per page load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);
    #[cfg(feature = "hydrate")]
    session.spawn_initial_resolve();

    view! {
        <Stylesheet id="leptos" href="/pkg/kyn-client.css"/>
        <Title text="Know-Your-Neighborhood"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("terms") view=TermsPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("auth-callback") view=AuthCallbackPage/>
                        <Route path=StaticSegment("forums") view=ForumsPage/>
                        <Route path=(StaticSegment("forums"), ParamSegment("id")) view=ForumPostPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
