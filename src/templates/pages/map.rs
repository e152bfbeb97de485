// templates/pages/map.rs

use crate::app::MapPageVm;
use crate::templates::{desktop_layout, map_view};
use maud::{html, Markup};

pub fn map_page(vm: &MapPageVm) -> Markup {
    desktop_layout(
        "Map View of Properties",
        html! {
            div class="mb-8" {
                h2 class="text-2xl font-bold text-center mb-4" { "Map View of Properties" }

                (map_view(&vm.settings, &vm.layer))

                p class="text-sm text-gray-500 text-center mt-2" {
                    (vm.layer.len()) " properties on the map"
                    @if let Some(at) = vm.snapshot.fetched_at() {
                        " · updated " (at.format("%Y-%m-%d %H:%M UTC").to_string())
                    }
                }
            }
        },
    )
}
