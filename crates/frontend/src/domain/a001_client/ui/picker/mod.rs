use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::a001_client::Client;

use crate::domain::a001_client::api;
use crate::shared::icons::icon;

/// Fenêtre de sélection d'un client.
///
/// Single click marks the row, double click confirms it directly.
#[component]
pub fn ClientPicker<F, G>(
    initial_selected_id: Option<i64>,
    on_selected: F,
    on_cancel: G,
) -> impl IntoView
where
    F: Fn(Client) + 'static + Clone + Send,
    G: Fn(()) + 'static + Clone + Send,
{
    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected_id, set_selected_id) = signal::<Option<i64>>(initial_selected_id);
    let (search_filter, set_search_filter) = signal(String::new());

    spawn_local(async move {
        match api::fetch_clients().await {
            Ok(items) => {
                set_clients.set(items);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("Chargement des clients impossible: {}", e);
                set_error.set(Some(e));
            }
        }
    });

    let filtered_clients = move || {
        let filter = search_filter.get().trim().to_lowercase();
        clients
            .get()
            .into_iter()
            .filter(|client| {
                if filter.is_empty() {
                    return true;
                }
                client.display_name.to_lowercase().contains(&filter)
                    || client
                        .phone
                        .as_deref()
                        .map(|p| p.to_lowercase().contains(&filter))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    };

    let handle_select = {
        let on_selected = on_selected.clone();
        move |_| {
            if let Some(id) = selected_id.get() {
                if let Some(client) =
                    clients.get().into_iter().find(|c| c.id.value() == id)
                {
                    on_selected(client);
                }
            }
        }
    };

    view! {
        <div class="picker">
            <div class="picker__header">
                <h3>"Choix du client"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="picker__search">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Nom ou téléphone..."
                    prop:value=move || search_filter.get()
                    on:input=move |ev| set_search_filter.set(event_target_value(&ev))
                />
            </div>

            <div class="picker__content">
                {move || {
                    let filtered = filtered_clients();
                    if filtered.is_empty() {
                        view! {
                            <div class="empty-state">"Aucun client trouvé"</div>
                        }.into_any()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Nom"</th>
                                        <th>"Téléphone"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {filtered.into_iter().map(|client| {
                                        let row_id = client.id.value();
                                        let is_selected = move || selected_id.get() == Some(row_id);

                                        view! {
                                            <tr
                                                class:data-table__row--selected=is_selected
                                                on:click=move |_| set_selected_id.set(Some(row_id))
                                                on:dblclick={
                                                    let on_selected = on_selected.clone();
                                                    let client = client.clone();
                                                    move |_| on_selected(client.clone())
                                                }
                                            >
                                                <td class="data-table__cell--primary">{client.display_name.clone()}</td>
                                                <td>{client.phone.clone().unwrap_or_else(|| "—".to_string())}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            <div class="picker__footer">
                <button
                    class="button button--primary"
                    on:click=handle_select
                    disabled=move || selected_id.get().is_none()
                >
                    {icon("check")}
                    " Choisir"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel(())>
                    "Annuler"
                </button>
            </div>
        </div>
    }
}
