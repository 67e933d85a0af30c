//! Map screen - View Component

use super::tile_map::TileMap;
use crate::domain::map::{geocode, geolocate};
use crate::shared::icons::icon;
use crate::shared::theme::{colors, fullscreen_overlay, sizes, spacing};
use contracts::domain::location::{GeoPoint, SelectedLocation};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const MAP_ZOOM: u8 = 15;

/// Full-screen location picker: device position for the initial center, free
/// text search, tap-to-drop-pin with reverse geocoding, and a confirm bar
/// that hands the selection back through `on_location_select`.
#[component]
pub fn MapScreen(
    #[prop(into)] visible: RwSignal<bool>,
    on_location_select: Callback<SelectedLocation>,
) -> impl IntoView {
    let search_text = RwSignal::new(String::new());
    let center = RwSignal::new(GeoPoint::new(37.78825, -122.4324));
    let selected = RwSignal::new(None::<SelectedLocation>);
    let error = RwSignal::new(None::<String>);

    let locate = move || {
        spawn_local(async move {
            match geolocate::current_position().await {
                Ok(point) => {
                    center.set(point);
                    let address = match geocode::resolve_address(point).await {
                        Ok(Some(address)) => address,
                        Ok(None) => "Current Location".to_string(),
                        Err(e) => {
                            log::warn!("reverse geocoding failed: {e}");
                            "Current Location".to_string()
                        }
                    };
                    selected.set(Some(SelectedLocation::new(point, address)));
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("geolocation failed: {e}");
                    error.set(Some(
                        "Location permission is required to show your current location on the map."
                            .to_string(),
                    ));
                }
            }
        });
    };

    // Resolve the device position each time the screen opens.
    Effect::new(move |_| {
        if visible.get() {
            locate();
        }
    });

    let handle_search = move || {
        let query = search_text.get_untracked();
        if query.trim().is_empty() {
            error.set(Some("Type a location in the search bar".to_string()));
            return;
        }
        spawn_local(async move {
            match geocode::search_address(&query).await {
                Ok(Some(point)) => {
                    center.set(point);
                    // The query text itself becomes the address.
                    selected.set(Some(SelectedLocation::new(point, query.clone())));
                    error.set(None);
                }
                Ok(None) => error.set(Some(
                    "Could not find the specified location. Please try a different search term."
                        .to_string(),
                )),
                Err(e) => {
                    log::warn!("geocoding failed: {e}");
                    error.set(Some(
                        "Could not search for the location. Please check your internet connection and try again."
                            .to_string(),
                    ));
                }
            }
        });
    };

    let handle_map_pick = Callback::new(move |point: GeoPoint| {
        spawn_local(async move {
            match geocode::resolve_address(point).await {
                Ok(Some(address)) => selected.set(Some(SelectedLocation::new(point, address))),
                Ok(None) => selected.set(Some(SelectedLocation::new(point, "Unknown location"))),
                Err(e) => log::warn!("reverse geocoding failed: {e}"),
            }
        });
    });

    let confirm = move |_| match selected.get_untracked() {
        Some(location) => {
            on_location_select.run(location);
            visible.set(false);
        }
        None => error.set(Some("Tap on the map to select your location".to_string())),
    };

    view! {
        <Show when=move || visible.get()>
            <div style=fullscreen_overlay(1010)>
                // Header
                <div style=format!(
                    "position: relative; display: flex; align-items: center; justify-content: center; \
                     padding: {}px {}px; border-bottom: 1px solid {};",
                    spacing::MD,
                    spacing::LG,
                    colors::BORDER
                )>
                    <button
                        style="position: absolute; left: 16px; background: none; border: none; cursor: pointer;"
                        on:click=move |_| visible.set(false)
                    >
                        {icon("back")}
                    </button>
                    <span style="font-size: 18px; font-weight: 600;">"Choose Location"</span>
                </div>

                // Search bar
                <div style=format!(
                    "display: flex; align-items: center; gap: 8px; padding: {}px {}px; \
                     border-bottom: 1px solid {};",
                    spacing::MD,
                    spacing::LG,
                    colors::BORDER
                )>
                    <div style=format!(
                        "flex: 1; display: flex; align-items: center; gap: 8px; height: 44px; \
                         padding: 0 {}px; border: 1px solid {}; border-radius: {}px;",
                        spacing::MD,
                        colors::INPUT_BORDER,
                        sizes::BORDER_RADIUS
                    )>
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search for a location..."
                            style="flex: 1; border: none; outline: none; font-size: 16px;"
                            prop:value=move || search_text.get()
                            on:input=move |ev| search_text.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    handle_search();
                                }
                            }
                        />
                        <Show when=move || !search_text.get().is_empty()>
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 4px;"
                                on:click=move |_| search_text.set(String::new())
                            >
                                {icon("close")}
                            </button>
                        </Show>
                    </div>
                    <button
                        style=format!(
                            "padding: 10px {}px; border: none; border-radius: {}px; cursor: pointer; \
                             background: {}; color: {}; font-size: 16px; font-weight: 600;",
                            spacing::LG,
                            sizes::BORDER_RADIUS,
                            colors::PRIMARY,
                            colors::TEXT_LIGHT
                        )
                        on:click=move |_| handle_search()
                    >
                        "Search"
                    </button>
                </div>

                // Map
                <div style=format!(
                    "position: relative; flex: 1; margin: {}px; border: 1px solid {}; \
                     border-radius: {}px; overflow: hidden;",
                    spacing::LG,
                    colors::BORDER,
                    sizes::BORDER_RADIUS
                )>
                    <TileMap center=center zoom=MAP_ZOOM selected=selected on_pick=handle_map_pick />
                    <button
                        style=format!(
                            "position: absolute; top: 12px; right: 12px; width: 50px; height: 50px; \
                             border-radius: 50%; border: none; cursor: pointer; display: flex; \
                             align-items: center; justify-content: center; background: {}; color: {}; \
                             box-shadow: 0 2px 4px rgba(0,0,0,0.25);",
                            colors::BACKGROUND,
                            colors::PRIMARY
                        )
                        on:click=move |_| locate()
                    >
                        {icon("locate")}
                    </button>
                </div>

                // Bottom controls
                <div style=format!(
                    "padding: {}px; border-top: 1px solid {};",
                    spacing::LG,
                    colors::BORDER
                )>
                    {move || {
                        error.get().map(|message| {
                            view! {
                                <div style=format!(
                                    "display: flex; align-items: center; gap: 8px; margin-bottom: {}px; \
                                     padding: {}px; border: 1px solid {}; border-radius: {}px; \
                                     background: {}; font-size: 14px;",
                                    spacing::MD,
                                    spacing::MD,
                                    colors::DANGER,
                                    sizes::BORDER_RADIUS,
                                    colors::BACKGROUND
                                )>{message}</div>
                            }
                        })
                    }}
                    {move || {
                        selected.get().map(|location| {
                            view! {
                                <div style=format!(
                                    "display: flex; align-items: center; gap: 8px; margin-bottom: {}px; \
                                     padding: {}px; border: 1px solid {}; border-radius: {}px; \
                                     background: {}; font-size: 14px; font-weight: 500;",
                                    spacing::MD,
                                    spacing::MD,
                                    colors::PRIMARY,
                                    sizes::BORDER_RADIUS,
                                    colors::SECONDARY
                                )>
                                    <span style=format!("color: {};", colors::PRIMARY)>
                                        {icon("location")}
                                    </span>
                                    {location.address}
                                </div>
                            }
                        })
                    }}
                    <button
                        style=move || format!(
                            "width: 100%; padding: {}px 0; border: none; border-radius: {}px; \
                             cursor: pointer; font-size: 16px; font-weight: 600; \
                             background: {}; color: {};",
                            spacing::MD,
                            sizes::BORDER_RADIUS,
                            if selected.get().is_some() { colors::PRIMARY } else { colors::NEUTRAL },
                            if selected.get().is_some() { colors::TEXT_LIGHT } else { colors::TEXT_DARK }
                        )
                        on:click=confirm
                    >
                        {move || {
                            if selected.get().is_some() {
                                "Confirm Location"
                            } else {
                                "Tap on map to select location"
                            }
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
