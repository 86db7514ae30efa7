//! Écran de composition d'une commande.
//!
//! Découpage MVVM:
//! - view_model.rs: état partagé et commandes de l'écran
//! - catalog_select.rs: sélection catégorie puis service dans le catalogue
//! - lines_table.rs: lignes du brouillon
//! - checkout_panel.rs: récapitulatif et envoi
//! - page.rs: assemblage de l'écran

mod catalog_select;
mod checkout_panel;
mod lines_table;
mod page;
mod view_model;

pub use page::OrderCompose;
pub use view_model::ComposeVm;
