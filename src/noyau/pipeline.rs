//! Noyau — pipeline complet
//!
//! chiffres demandés -> compute_pi (fork/join atan) -> to_base12_fraction -> flux "3.xxxx"
//!
//! Les chiffres sont écrits au fil de la conversion ; rien n’est conservé d’un appel à l’autre.

use std::io::Write;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use tracing::info;

use super::base12::{to_base12_fraction, Chiffre12, PARTIE_ENTIERE};
use super::decimal::Arrondi;
use super::erreur::Resultat;
use super::pi::compute_pi;

/// Ce que l’appelant demande (fixé pour toute la durée d’un calcul).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Demande {
    /// Précision décimale de π avant conversion.
    pub chiffres: NonZeroU32,
    /// Écrire aussi π en base 10 (arrondi à `chiffres`) avant la ligne base 12.
    pub base10: bool,
}

impl Demande {
    pub fn nouvelle(chiffres: NonZeroU32) -> Self {
        Self {
            chiffres,
            base10: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Bilan {
    /// Chiffres base 12 écrits après "3.".
    pub chiffres_base12: usize,
    pub duree: Duration,
}

/// API publique : calcule π et écrit `3.` suivi des chiffres base 12 dans `sortie`,
/// chaque chiffre dès qu’il est produit.
pub fn run<W: Write>(demande: &Demande, sortie: &mut W) -> Resultat<Bilan> {
    let debut = Instant::now();

    let pi = compute_pi(demande.chiffres)?;
    if demande.base10 {
        let lecture = pi.arrondir(demande.chiffres.get(), Arrondi::DemiHaut);
        writeln!(sortie, "Base 10 : {lecture}")?;
    }

    let developpement = to_base12_fraction(&pi, demande.chiffres)?;

    write!(sortie, "{PARTIE_ENTIERE}.")?;
    let mut n = 0usize;
    for chiffre in developpement {
        write!(sortie, "{chiffre}")?;
        n += 1;
    }
    writeln!(sortie)?;
    sortie.flush()?;

    let duree = debut.elapsed();
    info!(chiffres = demande.chiffres.get(), base12 = n, ms = duree.as_millis() as u64, "π base 12 écrit");

    Ok(Bilan {
        chiffres_base12: n,
        duree,
    })
}

/// Variante sans flux : renvoie "3.xxxx" (base 12) pour `decimal_digits` chiffres décimaux.
pub fn developper(decimal_digits: NonZeroU32) -> Resultat<String> {
    let pi = compute_pi(decimal_digits)?;
    let mut texte = format!("{PARTIE_ENTIERE}.");
    texte.extend(to_base12_fraction(&pi, decimal_digits)?.map(Chiffre12::symbole));
    Ok(texte)
}
