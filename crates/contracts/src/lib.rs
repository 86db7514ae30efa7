//! Types partagés de la console pressing: entités canoniques,
//! adaptateurs de normalisation du JSON serveur, moteur de composition
//! de commande et DTOs d'échange.

pub mod domain;
pub mod system;
