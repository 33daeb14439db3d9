use super::{
    condition_label, greeting, humidity_label, icon_url, temperature_label, wind_label,
};
use crate::net::types::{
    CurrentWeather, Temperature, User, WeatherCondition, WeatherDescription, Wind, WindDirection,
    WindSpeed,
};
use crate::state::session::SessionState;

fn member(name: Option<&str>) -> SessionState {
    let mut state = SessionState::default();
    state.settle(Some(User { email: "kim@example.com".to_owned(), name: name.map(str::to_owned) }));
    state
}

// ==============================
// Greeting
// ==============================

#[test]
fn greeting_uses_display_name() {
    let line = greeting(&member(Some("Kim"))).unwrap();
    assert_eq!(line, "Hello, Kim! Explore the community forums below.");
}

#[test]
fn greeting_falls_back_to_email() {
    let line = greeting(&member(None)).unwrap();
    assert_eq!(line, "Hello, kim@example.com! Explore the community forums below.");
}

#[test]
fn no_greeting_for_anonymous_visitors() {
    let mut state = SessionState::default();
    state.settle(None);
    assert_eq!(greeting(&state), None);
}

// ==============================
// Weather labels
// ==============================

fn sample_weather() -> CurrentWeather {
    CurrentWeather {
        weather_condition: Some(WeatherCondition {
            icon_base_uri: Some("https://maps.gstatic.com/weather/v1/sunny".to_owned()),
            description: Some(WeatherDescription { text: Some("Sunny".to_owned()) }),
        }),
        temperature: Some(Temperature { degrees: Some(30.1) }),
        feels_like_temperature: Some(Temperature { degrees: Some(33.0) }),
        relative_humidity: Some(65.0),
        wind: Some(Wind {
            direction: Some(WindDirection { cardinal: Some("NORTH".to_owned()) }),
            speed: Some(WindSpeed { value: Some(11.0) }),
        }),
    }
}

#[test]
fn labels_read_nested_payload() {
    let weather = sample_weather();
    assert_eq!(condition_label(&weather), "Sunny");
    assert_eq!(temperature_label(weather.temperature.as_ref()), "30.1");
    assert_eq!(temperature_label(weather.feels_like_temperature.as_ref()), "33");
    assert_eq!(humidity_label(&weather), "65");
    assert_eq!(wind_label(&weather), "11 km/h NORTH");
}

#[test]
fn labels_fall_back_on_sparse_payload() {
    let weather = CurrentWeather::default();
    assert_eq!(condition_label(&weather), "N/A");
    assert_eq!(temperature_label(weather.temperature.as_ref()), "N/A");
    assert_eq!(humidity_label(&weather), "N/A");
    assert_eq!(wind_label(&weather), "N/A km/h");
}

#[test]
fn wind_label_trims_missing_cardinal() {
    let weather = CurrentWeather {
        wind: Some(Wind {
            direction: None,
            speed: Some(WindSpeed { value: Some(7.5) }),
        }),
        ..CurrentWeather::default()
    };
    assert_eq!(wind_label(&weather), "7.5 km/h");
}

#[test]
fn icon_url_appends_png_extension() {
    let weather = sample_weather();
    assert_eq!(
        icon_url(&weather).as_deref(),
        Some("https://maps.gstatic.com/weather/v1/sunny.png")
    );
    assert_eq!(icon_url(&CurrentWeather::default()), None);
}
