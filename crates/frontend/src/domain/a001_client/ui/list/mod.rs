use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::a001_client::{Client, ClientDto};

use crate::domain::a001_client::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_session;

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        self.display_name.to_lowercase().contains(filter)
            || self
                .phone
                .as_deref()
                .map(|p| p.to_lowercase().contains(filter))
                .unwrap_or(false)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "phone" => self
                .phone
                .as_deref()
                .unwrap_or("")
                .cmp(other.phone.as_deref().unwrap_or("")),
            "address" => self
                .address
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .cmp(&other.address.as_deref().unwrap_or("").to_lowercase()),
            _ => self
                .display_name
                .to_lowercase()
                .cmp(&other.display_name.to_lowercase()),
        }
    }
}

/// Fichier clients: liste, création et modification.
#[component]
pub fn ClientsList() -> impl IntoView {
    let session = use_session();

    let (clients, set_clients) = signal::<Vec<Client>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal("display_name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    // None = closed, Some(None) = create, Some(Some(c)) = edit
    let (form_target, set_form_target) = signal::<Option<Option<Client>>>(None);

    let can_edit = move || session.current_role().can_edit_clients();

    let load_clients = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_clients().await {
                Ok(items) => {
                    set_clients.set(items);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Chargement des clients impossible: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    let (is_loaded, set_is_loaded) = signal(false);
    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            set_is_loaded.set(true);
            load_clients();
        }
    });

    let visible_clients = move || {
        let mut items = filter_list(clients.get(), &search.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    view! {
        <PageFrame page_id="a001_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clients"</h1>
                    <Badge>
                        {move || clients.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when=can_edit>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_form_target.set(Some(None))
                        >
                            {icon("plus")}
                            " Nouveau client"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_clients()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Nom ou téléphone..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="table-wrapper">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th on:click=toggle_sort("display_name")>
                                    {move || format!("Nom{}", get_sort_indicator(&sort_field.get(), "display_name", sort_ascending.get()))}
                                </th>
                                <th on:click=toggle_sort("phone")>
                                    {move || format!("Téléphone{}", get_sort_indicator(&sort_field.get(), "phone", sort_ascending.get()))}
                                </th>
                                <th on:click=toggle_sort("address")>
                                    {move || format!("Adresse{}", get_sort_indicator(&sort_field.get(), "address", sort_ascending.get()))}
                                </th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible_clients().into_iter().map(|client| {
                                let edit_client = client.clone();
                                view! {
                                    <tr>
                                        <td class="data-table__cell--primary">{client.display_name.clone()}</td>
                                        <td>{client.phone.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td>{client.address.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td class="data-table__cell--actions">
                                            <Show when=can_edit>
                                                {
                                                    let edit_client = edit_client.clone();
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click={
                                                                let edit_client = edit_client.clone();
                                                                move |_| set_form_target.set(Some(Some(edit_client.clone())))
                                                            }
                                                        >
                                                            {icon("pencil")}
                                                        </Button>
                                                    }
                                                }
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>

                    {move || {
                        if !loading.get() && visible_clients().is_empty() {
                            view! { <div class="empty-state">"Aucun client trouvé"</div> }.into_any()
                        } else {
                            view! { <span></span> }.into_any()
                        }
                    }}
                </div>
            </div>

            {move || form_target.get().map(|target| view! {
                <ClientFormModal
                    client=target
                    on_close=Callback::new(move |_| set_form_target.set(None))
                    on_saved=Callback::new(move |_| {
                        set_form_target.set(None);
                        load_clients();
                    })
                />
            })}
        </PageFrame>
    }
}

/// Création ou modification d'un client dans une fenêtre modale.
#[component]
fn ClientFormModal(
    client: Option<Client>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let existing_id = client.as_ref().map(|c| c.id);
    let title = match &client {
        Some(c) => format!("Modifier: {}", c.display_name),
        None => "Nouveau client".to_string(),
    };

    let display_name = RwSignal::new(
        client.as_ref().map(|c| c.display_name.clone()).unwrap_or_default(),
    );
    let phone = RwSignal::new(
        client.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default(),
    );
    let address = RwSignal::new(
        client.as_ref().and_then(|c| c.address.clone()).unwrap_or_default(),
    );

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_save = move |_| {
        set_saving.set(true);
        set_error.set(None);

        let dto = ClientDto {
            display_name: display_name.get().trim().to_string(),
            phone: if phone.get().trim().is_empty() {
                None
            } else {
                Some(phone.get().trim().to_string())
            },
            address: if address.get().trim().is_empty() {
                None
            } else {
                Some(address.get().trim().to_string())
            },
        };

        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_client(id, &dto).await,
                None => api::create_client(&dto).await,
            };
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Nom"</Label>
                        <Input
                            value=display_name
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Téléphone"</Label>
                        <Input
                            value=phone
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Adresse"</Label>
                        <Input
                            value=address
                            disabled=Signal::derive(move || saving.get())
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Annuler"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
