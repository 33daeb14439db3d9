//! Landing page: greeting, local weather, and the community feed.
//!
//! DESIGN
//! ======
//! The weather panel never blocks the rest of the page. It starts after
//! hydration with a geolocation prompt, and every failure (missing API key,
//! denied location, upstream error) degrades to a one-line message while the
//! feed renders independently beneath it.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::identity::SessionStore;
use crate::net::types::{CurrentWeather, Temperature};
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
const MISSING_KEY_MESSAGE: &str = "API key is missing. Please check environment configuration.";
#[cfg(feature = "hydrate")]
const WEATHER_FETCH_FAILED_MESSAGE: &str = "Unable to fetch weather data for your location";

// ==============================
// Pure label helpers
// ==============================

/// Greeting line for a recognized member; `None` for anonymous visitors.
fn greeting(state: &SessionState) -> Option<String> {
    state
        .user
        .as_ref()
        .map(|user| format!("Hello, {}! Explore the community forums below.", user.display_name()))
}

fn not_available() -> String {
    "N/A".to_owned()
}

fn condition_label(weather: &CurrentWeather) -> String {
    weather
        .weather_condition
        .as_ref()
        .and_then(|condition| condition.description.as_ref())
        .and_then(|description| description.text.clone())
        .unwrap_or_else(not_available)
}

fn temperature_label(slot: Option<&Temperature>) -> String {
    slot.and_then(|t| t.degrees)
        .map_or_else(not_available, |degrees| format!("{degrees}"))
}

fn humidity_label(weather: &CurrentWeather) -> String {
    weather
        .relative_humidity
        .map_or_else(not_available, |humidity| format!("{humidity}"))
}

/// Speed plus cardinal direction, e.g. `"11 km/h NORTH"`. Either half falls
/// back independently, matching the upstream payload's optional fields.
fn wind_label(weather: &CurrentWeather) -> String {
    let speed = weather
        .wind
        .as_ref()
        .and_then(|wind| wind.speed.as_ref())
        .and_then(|speed| speed.value)
        .map_or_else(not_available, |value| format!("{value}"));
    let cardinal = weather
        .wind
        .as_ref()
        .and_then(|wind| wind.direction.as_ref())
        .and_then(|direction| direction.cardinal.clone())
        .unwrap_or_default();
    format!("{speed} km/h {cardinal}").trim_end().to_owned()
}

/// The upstream icon URI comes without an extension.
fn icon_url(weather: &CurrentWeather) -> Option<String> {
    weather
        .weather_condition
        .as_ref()
        .and_then(|condition| condition.icon_base_uri.as_ref())
        .map(|base| format!("{base}.png"))
}

// ==============================
// Page component
// ==============================

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let weather = RwSignal::new(None::<CurrentWeather>);
    let weather_error = RwSignal::new(String::new());
    let weather_loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(key) = crate::net::api::weather_api_key() else {
            weather_error.set(MISSING_KEY_MESSAGE.to_owned());
            return;
        };
        weather_loading.set(true);
        let outcome = async {
            let point = crate::util::geo::current_position().await?;
            crate::net::api::fetch_current_weather(key, point.latitude, point.longitude)
                .await
                .map_err(|err| {
                    leptos::logging::warn!("weather lookup failed: {err}");
                    WEATHER_FETCH_FAILED_MESSAGE.to_owned()
                })
        }
        .await;
        match outcome {
            Ok(data) => weather.set(Some(data)),
            Err(message) => weather_error.set(message),
        }
        weather_loading.set(false);
    });

    let feed = LocalResource::new(crate::net::api::fetch_community_feed);

    view! {
        <div class="home">
            <section class="home__hero">
                <h2>"Welcome to Know-Your-Neighborhood"</h2>
                <p class="home__intro">
                    <Show
                        when=move || session.current().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login">"Log in"</a>
                                " or "
                                <a href="/register">"register"</a>
                                " to join the community!"
                            }
                        }
                    >
                        {move || greeting(&session.current())}
                    </Show>
                </p>
            </section>

            <section class="home__weather">
                <h2>"Current Weather"</h2>
                <Show when=move || weather_loading.get()>
                    <p class="home__weather-loading">"Loading weather..."</p>
                </Show>
                <Show when=move || !weather_error.get().is_empty()>
                    <p class="home__error">{move || weather_error.get()}</p>
                </Show>
                {move || {
                    weather
                        .get()
                        .map(|data| {
                            view! {
                                <div class="home__weather-card">
                                    <h3>"Weather at Your Location"</h3>
                                    <p>"Condition: " {condition_label(&data)}</p>
                                    <p>
                                        "Temperature: " {temperature_label(data.temperature.as_ref())}
                                        "°C"
                                    </p>
                                    <p>
                                        "Feels Like: "
                                        {temperature_label(data.feels_like_temperature.as_ref())} "°C"
                                    </p>
                                    <p>"Humidity: " {humidity_label(&data)} "%"</p>
                                    <p>"Wind: " {wind_label(&data)}</p>
                                    {icon_url(&data)
                                        .map(|url| {
                                            view! {
                                                <img class="home__weather-icon" src=url alt="Weather Icon"/>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </section>

            <section class="home__feed">
                <h2>"Community Feed"</h2>
                <Suspense fallback=move || {
                    view! { <p class="home__feed-loading">"Loading..."</p> }
                }>
                    {move || {
                        feed.get()
                            .map(|result| match result {
                                Ok(items) if items.is_empty() => {
                                    view! { <p class="home__empty">"No recent activity."</p> }
                                        .into_any()
                                }
                                Ok(items) => {
                                    items
                                        .into_iter()
                                        .map(|item| {
                                            let link = format!("/forums/{}", item.id);
                                            view! {
                                                <div class="home__feed-item">
                                                    <h3>{item.title}</h3>
                                                    <p>{item.description}</p>
                                                    <p class="home__feed-author">
                                                        "Posted by: " {item.created_by.unwrap_or_default()}
                                                    </p>
                                                    <a href=link>"View Posts"</a>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(err) => {
                                    leptos::logging::warn!("community feed failed: {err}");
                                    view! {
                                        <p class="home__error">"Failed to load community feed"</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
