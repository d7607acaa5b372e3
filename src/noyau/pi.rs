// src/noyau/pi.rs
//
// π (Machin) : π = 4·(4·atan(1/5) − atan(1/239))
// -----------------------------------------------
// - échelle de travail = chiffres demandés + GARDE_SERIE
// - atan(1/5) et atan(1/239) : fork/join (rayon::join), aucun état partagé
// - le résultat garde l’échelle de travail (les chiffres de garde servent à la conversion)

use std::num::NonZeroU32;

use tracing::{debug, info_span};

use super::arctan::evaluate;
use super::decimal::Decimal;
use super::erreur::Resultat;

/// Chiffres de garde ajoutés à l’échelle des deux séries.
pub const GARDE_SERIE: u32 = 5;

/// π à `decimal_digits` chiffres (plus GARDE_SERIE chiffres de garde).
pub fn compute_pi(decimal_digits: NonZeroU32) -> Resultat<Decimal> {
    let echelle = decimal_digits.get().saturating_add(GARDE_SERIE);
    let _span = info_span!("compute_pi", chiffres = decimal_digits.get(), echelle).entered();

    let (atan5, atan239) = rayon::join(|| evaluate(5, echelle), || evaluate(239, echelle));
    let (atan5, atan239) = (atan5?, atan239?);
    debug!("séries jointes");

    let quatre = Decimal::from(4u32);
    let pi = &(&(&atan5 * &quatre) - &atan239) * &quatre;
    Ok(pi)
}
