// src/noyau/arctan.rs
//
// arctan(1/x) à échelle fixe (série de Taylor alternée)
// ----------------------------------------------------
// atan(1/x) = 1/x - 1/(3x³) + 1/(5x⁵) - ...
// - numérateur k : 1/x^(2k+1), obtenu par divisions successives par x²
// - terme k      : numérateur / (2k+1)
// - arrêt        : dès qu’un terme vaut exactement 0 à l’échelle de travail
// - garde-fou    : plafond d’itérations (échec explicite, jamais de boucle infinie)

use std::num::NonZeroU32;

use tracing::{debug, trace_span};

use super::decimal::Decimal;
use super::erreur::{Erreur, Resultat};
use super::ARRONDI;

/// Plafond d’itérations pour une échelle donnée.
/// Pour x ≥ 2, le terme k est < 10^-scale dès que 4^k > 10^scale, soit k ≈ 0,83·scale.
pub fn plafond_iterations(scale: u32) -> u64 {
    2 * u64::from(scale) + 64
}

/// arctan(1/inverse_x) arrondi à `scale` chiffres après la virgule.
///
/// `inverse_x` doit être > 1 (sinon `Erreur::HorsDomaine`).
pub fn evaluate(inverse_x: u32, scale: u32) -> Resultat<Decimal> {
    let x = NonZeroU32::new(inverse_x)
        .filter(|x| x.get() > 1)
        .ok_or(Erreur::HorsDomaine { inverse_x })?;

    let _span = trace_span!("arctan", inverse_x, scale).entered();

    let x2 = Decimal::from(inverse_x).pow(2);
    let plafond = plafond_iterations(scale);

    let mut numer = Decimal::un().div_entier(x, scale, ARRONDI);
    let mut resultat = numer.clone();

    let mut k: u64 = 1;
    loop {
        if k > plafond {
            return Err(Erreur::NonConvergence {
                inverse_x,
                iterations: plafond,
            });
        }

        numer = numer.div(&x2, scale, ARRONDI)?;
        let terme = numer.div(&Decimal::from(2 * k + 1), scale, ARRONDI)?;

        // signe (-1)^k
        resultat = if k % 2 == 1 {
            &resultat - &terme
        } else {
            &resultat + &terme
        };

        if terme.is_zero() {
            break;
        }
        k += 1;
    }

    debug!(inverse_x, scale, iterations = k, "série arctan convergée");
    Ok(resultat)
}
