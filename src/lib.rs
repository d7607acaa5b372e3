//! π en base douze
//!
//! - noyau  : décimal scalé, série arctan, Machin (fork/join), conversion radix-12
//! - config : ligne de commande (clap) + journal (tracing)
//!
//! Point d’entrée pour un consommateur de chiffres (lecteur, sonification…) :
//! `noyau::to_base12_fraction(&noyau::compute_pi(d)?, d)?` donne les chiffres un à un.

pub mod config;
pub mod noyau;

pub use noyau::{compute_pi, developper, run, to_base12_fraction, Chiffre12, Demande, Erreur};
