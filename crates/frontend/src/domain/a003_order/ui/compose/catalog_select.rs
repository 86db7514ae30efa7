use leptos::prelude::*;
use thaw::*;

use contracts::domain::a002_tariff::{CatalogEntry, PricingMode};

use super::view_model::ComposeVm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::format::format_money;
use crate::shared::icons::icon;

/// Sélecteur de catalogue en deux temps, avec recherche transversale.
///
/// Tant que la recherche est vide on choisit catégorie puis service;
/// une recherche non vide affiche les entrées correspondantes, un clic
/// remplit les deux listes d'un coup.
#[component]
pub fn CatalogSelect(vm: ComposeVm) -> impl IntoView {
    let category_value = Signal::derive(move || {
        vm.selection.with(|s| s.category.clone().unwrap_or_default())
    });
    let service_value = Signal::derive(move || {
        vm.selection.with(|s| s.service.clone().unwrap_or_default())
    });

    let category_options = Signal::derive(move || {
        vm.catalog.with(|index| {
            index
                .categories()
                .into_iter()
                .map(|category| (category.clone(), category))
                .collect::<Vec<_>>()
        })
    });

    let service_options = Signal::derive(move || {
        let Some(category) = vm.selection.with(|s| s.category.clone()) else {
            return Vec::new();
        };
        vm.catalog.with(|index| {
            index
                .services_for(&category)
                .into_iter()
                .map(|entry| {
                    (
                        entry.service_label.clone(),
                        format!("{} ({})", entry.service_label, format_money(entry.unit_price)),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    let search_results = move || {
        let needle = vm.search.get();
        if needle.trim().is_empty() {
            return Vec::new();
        }
        vm.catalog.with(|index| {
            index
                .search(&needle)
                .into_iter()
                .cloned()
                .collect::<Vec<CatalogEntry>>()
        })
    };

    let quantity_label = match vm.mode {
        PricingMode::ByItem => "Quantité",
        PricingMode::ByWeight => "Poids (kg)",
    };
    let quantity_step = match vm.mode {
        PricingMode::ByItem => "1",
        PricingMode::ByWeight => "0.1",
    };

    let disabled = vm.is_submitting();

    view! {
        <div class="catalog-select">
            <div class="form__group">
                <label class="form__label">"Recherche au catalogue"</label>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Article, tranche ou service..."
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
            </div>

            {move || {
                let results = search_results();
                if results.is_empty() {
                    return view! { <span></span> }.into_any();
                }
                view! {
                    <div class="catalog-select__results">
                        {results.into_iter().map(|entry| {
                            let label = entry.display_label();
                            let price = format_money(entry.unit_price);
                            view! {
                                <button
                                    class="catalog-select__result"
                                    on:click=move |_| vm.pick_entry(&entry)
                                >
                                    <span>{label}</span>
                                    <span class="catalog-select__price">{price}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            <div class="catalog-select__steps">
                <Select
                    label="Catégorie"
                    value=category_value
                    options=category_options
                    placeholder="Choisir une catégorie"
                    on_change=Callback::new(move |value: String| {
                        vm.choose_category(&value);
                    })
                />
                <Select
                    label="Service"
                    value=service_value
                    options=service_options
                    placeholder="Choisir un service"
                    on_change=Callback::new(move |value: String| {
                        vm.choose_service(&value);
                    })
                />
            </div>

            <div class="catalog-select__line">
                <Input
                    label=quantity_label
                    value=vm.quantity_text
                    input_type="number"
                    step=quantity_step
                    min="0"
                    on_input=Callback::new(move |value: String| {
                        vm.quantity_text.set(value);
                    })
                />

                <div class="catalog-select__unit-price">
                    {move || vm.selection.with(|s| {
                        if s.is_complete() {
                            format!("Prix unitaire: {}", format_money(s.unit_price))
                        } else {
                            String::new()
                        }
                    })}
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.add_line()
                    disabled=disabled
                >
                    {icon("plus")}
                    " Ajouter la ligne"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.clear_selection()
                    disabled=disabled
                >
                    "Effacer"
                </Button>
            </div>
        </div>
    }
}
