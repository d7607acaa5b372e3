// src/noyau/base12.rs
//
// Conversion radix-12 de la partie fractionnaire (π − 3)
// -----------------------------------------------------
// Curseur : (reste, diviseur = 12^exposant, exposant)
// - descente   : diviseur > reste  => chiffre 0, exposant − 1
// - extraction : compte = ⌊reste / diviseur⌋ ∈ [0, 11], reste −= compte·diviseur
// - après chaque chiffre : diviseur /= 12 à l’échelle chiffres + GARDE_DIVISEUR
//
// Fin de séquence :
// - reste exactement nul (cas normal)
// - diviseur arrondi à zéro (budget de précision épuisé)
// - compte ≥ 12 (le diviseur arrondi a dérivé : la suite serait du bruit)
// - plafond de positions atteint (borne explicite, jamais de boucle infinie)

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroU32;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use tracing::{debug, warn};

use super::decimal::{Arrondi, Decimal};
use super::erreur::{Erreur, Resultat};
use super::ARRONDI;

/// Partie entière attendue (la valeur convertie est de la forme 3.xxx).
pub const PARTIE_ENTIERE: u32 = 3;

/// Garde du premier diviseur (1/12).
pub const GARDE_DIVISEUR_INITIAL: u32 = 5;

/// Garde des diviseurs suivants (1/12^k, k ≥ 2) : limite l’erreur cumulée.
pub const GARDE_DIVISEUR: u32 = 10;

const DOUZE: NonZeroU32 = match NonZeroU32::new(12) {
    Some(n) => n,
    None => unreachable!(),
};

const SYMBOLES: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B'];

/* ------------------------ Chiffre base 12 ------------------------ */

/// Un chiffre en base douze (valeur 0..=11, symbole 0–9, A, B).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chiffre12(u8);

impl Chiffre12 {
    pub const ZERO: Chiffre12 = Chiffre12(0);

    pub fn nouveau(valeur: u32) -> Option<Self> {
        u8::try_from(valeur)
            .ok()
            .filter(|v| *v < 12)
            .map(Chiffre12)
    }

    pub fn valeur(self) -> u8 {
        self.0
    }

    pub fn symbole(self) -> char {
        SYMBOLES[usize::from(self.0)]
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        SYMBOLES
            .iter()
            .position(|s| *s == c)
            .map(|i| Chiffre12(i as u8))
    }
}

impl fmt::Display for Chiffre12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/* ------------------------ Curseur de conversion ------------------------ */

/// Séquence paresseuse, finie et non redémarrable des chiffres base 12.
#[derive(Debug)]
pub struct DeveloppementBase12 {
    reste: Decimal,
    diviseur: Decimal,
    exposant: i64,
    echelle_diviseur: u32,
    emis: usize,
    plafond: usize,
    fini: bool,
}

/// Nombre maximal de positions pour `decimal_digits` chiffres décimaux :
/// le diviseur 12^-k s’annule à l’échelle d + GARDE_DIVISEUR vers k ≈ (d + garde)·log₁₂(10).
pub fn plafond_positions(decimal_digits: NonZeroU32) -> usize {
    let d = f64::from(decimal_digits.get()) + f64::from(GARDE_DIVISEUR);
    (d * (10f64.ln() / 12f64.ln())).ceil() as usize + 2
}

/// Prépare la conversion de la partie fractionnaire de `pi` (π − 3) en base 12.
pub fn to_base12_fraction(pi: &Decimal, decimal_digits: NonZeroU32) -> Resultat<DeveloppementBase12> {
    let reste = pi - &Decimal::from(PARTIE_ENTIERE);
    if reste.est_negatif() || reste >= Decimal::un() {
        return Err(Erreur::FractionHorsIntervalle {
            fraction: reste.to_string(),
        });
    }

    let d = decimal_digits.get();
    let diviseur = Decimal::un().div_entier(DOUZE, d.saturating_add(GARDE_DIVISEUR_INITIAL), ARRONDI);

    Ok(DeveloppementBase12 {
        reste,
        diviseur,
        exposant: -1,
        echelle_diviseur: d.saturating_add(GARDE_DIVISEUR),
        emis: 0,
        plafond: plafond_positions(decimal_digits),
        fini: false,
    })
}

impl DeveloppementBase12 {
    /// Exposant du prochain chiffre (chiffre × 12^exposant).
    pub fn exposant(&self) -> i64 {
        self.exposant
    }

    pub fn emis(&self) -> usize {
        self.emis
    }

    pub fn plafond(&self) -> usize {
        self.plafond
    }

    fn position_suivante(&mut self) {
        self.exposant -= 1;
        self.diviseur = self
            .diviseur
            .div_entier(DOUZE, self.echelle_diviseur, ARRONDI);
    }

    fn terminer(&mut self) -> Option<Chiffre12> {
        self.fini = true;
        None
    }

    fn extraire(&mut self) -> Option<Chiffre12> {
        let compte = match self.reste.div(&self.diviseur, 0, Arrondi::VersZero) {
            Ok(q) => q.partie_entiere(),
            Err(e) => {
                debug!(exposant = self.exposant, %e, "diviseur nul : précision épuisée");
                return self.terminer();
            }
        };

        let Some(chiffre) = compte.to_u32().and_then(Chiffre12::nouveau) else {
            debug!(exposant = self.exposant, %compte, "compte ≥ 12 : dérive d’arrondi, arrêt");
            return self.terminer();
        };

        let retire = &Decimal::from(u32::from(chiffre.valeur())) * &self.diviseur;
        self.reste = &self.reste - &retire;
        Some(chiffre)
    }
}

impl Iterator for DeveloppementBase12 {
    type Item = Chiffre12;

    fn next(&mut self) -> Option<Chiffre12> {
        if self.fini {
            return None;
        }
        if self.reste.is_zero() {
            debug!(emis = self.emis, "reste nul : conversion terminée");
            return self.terminer();
        }
        if self.emis >= self.plafond {
            warn!(plafond = self.plafond, "plafond de positions atteint, conversion tronquée");
            return self.terminer();
        }

        let chiffre = if self.diviseur > self.reste {
            Chiffre12::ZERO
        } else {
            self.extraire()?
        };

        self.emis += 1;
        self.position_suivante();
        Some(chiffre)
    }
}

impl FusedIterator for DeveloppementBase12 {}

/* ------------------------ Reconstruction exacte ------------------------ */

/// Σ cᵢ·12^-(i+1) : valeur exacte d’une suite de chiffres fractionnaires base 12.
pub fn fraction_exacte(chiffres: &[Chiffre12]) -> BigRational {
    let douze = BigInt::from(12);
    let mut num = BigInt::zero();
    for c in chiffres {
        num = num * &douze + BigInt::from(c.valeur());
    }
    let den = douze.pow(chiffres.len() as u32);
    BigRational::new(num, den)
}
