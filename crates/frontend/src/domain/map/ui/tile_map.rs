use crate::shared::geo;
use crate::shared::icons::icon;
use crate::shared::theme::colors;
use contracts::domain::location::{GeoPoint, SelectedLocation};
use leptos::prelude::*;

/// One positioned tile image of the visible grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub url: String,
    pub left: f64,
    pub top: f64,
}

/// Visible tile grid for a viewport of `width` x `height` pixels centered on
/// `center`. Columns wrap around the antimeridian; rows outside the world are
/// skipped.
pub fn visible_tiles(center: GeoPoint, zoom: u8, width: f64, height: f64) -> Vec<TilePlacement> {
    let (cx, cy) = geo::project(center, zoom);
    let origin_x = cx - width / 2.0;
    let origin_y = cy - height / 2.0;

    let first_col = (origin_x / geo::TILE_SIZE).floor() as i32;
    let first_row = (origin_y / geo::TILE_SIZE).floor() as i32;
    let last_col = ((origin_x + width) / geo::TILE_SIZE).floor() as i32;
    let last_row = ((origin_y + height) / geo::TILE_SIZE).floor() as i32;
    let rows = geo::tile_count(zoom);

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        if row < 0 || row >= rows {
            continue;
        }
        for col in first_col..=last_col {
            let wrapped = geo::wrap_tile_x(col, zoom);
            tiles.push(TilePlacement {
                url: format!(
                    "https://tile.openstreetmap.org/{}/{}/{}.png",
                    zoom, wrapped, row
                ),
                left: col as f64 * geo::TILE_SIZE - origin_x,
                top: row as f64 * geo::TILE_SIZE - origin_y,
            });
        }
    }
    tiles
}

/// Interactive OpenStreetMap tile grid. Renders the tiles around `center`,
/// drops a pin on the current selection, and reports clicked coordinates
/// through `on_pick`.
#[component]
pub fn TileMap(
    center: RwSignal<GeoPoint>,
    zoom: u8,
    selected: RwSignal<Option<SelectedLocation>>,
    on_pick: Callback<GeoPoint>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let size = RwSignal::new((360.0_f64, 420.0_f64));

    // Measure the container after it is laid out.
    Effect::new(move |_| {
        if let Some(container) = container_ref.get() {
            let rect = container.get_bounding_client_rect();
            if rect.width() > 0.0 && rect.height() > 0.0 {
                size.set((rect.width(), rect.height()));
            }
        }
    });

    let tiles = move || {
        let (width, height) = size.get();
        visible_tiles(center.get(), zoom, width, height)
    };

    // Selection pin position inside the viewport, if it is in view.
    let pin_position = move || {
        let location = selected.get()?;
        let (width, height) = size.get();
        let (cx, cy) = geo::project(center.get(), zoom);
        let (px, py) = geo::project(location.point(), zoom);
        let x = px - (cx - width / 2.0);
        let y = py - (cy - height / 2.0);
        if x < 0.0 || y < 0.0 || x > width || y > height {
            return None;
        }
        Some((x, y))
    };

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let rect = container.get_bounding_client_rect();
        let (width, height) = size.get_untracked();
        let (cx, cy) = geo::project(center.get_untracked(), zoom);
        let px = cx - width / 2.0 + (ev.client_x() as f64 - rect.left());
        let py = cy - height / 2.0 + (ev.client_y() as f64 - rect.top());
        on_pick.run(geo::unproject(px, py, zoom));
    };

    view! {
        <div
            node_ref=container_ref
            style="position: relative; width: 100%; height: 100%; overflow: hidden; \
                   cursor: crosshair; background: #e8e8e8;"
            on:click=handle_click
        >
            <For
                each=tiles
                key=|tile| (tile.url.clone(), tile.left as i64)
                let:tile
            >
                <img
                    src=tile.url.clone()
                    style=format!(
                        "position: absolute; left: {}px; top: {}px; width: 256px; height: 256px; \
                         pointer-events: none; user-select: none;",
                        tile.left, tile.top
                    )
                />
            </For>
            {move || {
                pin_position().map(|(x, y)| {
                    view! {
                        <div style=format!(
                            "position: absolute; left: {}px; top: {}px; \
                             transform: translate(-50%, -100%); color: {}; pointer-events: none;",
                            x,
                            y,
                            colors::PRIMARY
                        )>{icon("location")}</div>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_the_viewport() {
        let tiles = visible_tiles(GeoPoint::new(0.0, 0.0), 15, 512.0, 512.0);
        // A 512px viewport spans at least 2 and at most 3 tile columns/rows.
        assert!(tiles.len() >= 4);
        assert!(tiles.len() <= 9);
        for tile in &tiles {
            assert!(tile.left > -geo::TILE_SIZE && tile.left <= 512.0);
            assert!(tile.top > -geo::TILE_SIZE && tile.top <= 512.0);
        }
    }

    #[test]
    fn test_tile_urls_use_wrapped_columns() {
        let tiles = visible_tiles(GeoPoint::new(0.0, -179.999), 1, 600.0, 256.0);
        for tile in &tiles {
            // At zoom 1 there are only columns 0 and 1.
            assert!(tile.url.contains("/1/0/") || tile.url.contains("/1/1/"));
        }
    }

    #[test]
    fn test_rows_outside_the_world_are_skipped() {
        let tiles = visible_tiles(GeoPoint::new(geo::MAX_LATITUDE, 0.0), 0, 256.0, 1024.0);
        for tile in &tiles {
            assert!(tile.url.ends_with("/0/0.png") || tile.url.contains("/0/0/"));
        }
    }
}
