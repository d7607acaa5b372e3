// src/config.rs
//
// Ligne de commande + journal
// ---------------------------
// - CHIFFRES : précision décimale (défaut 1000), entier > 0
// - une précision invalide est une erreur de configuration : message + code ≠ 0,
//   le noyau n’est jamais appelé
// - journal sur stderr (stdout reste le flux de chiffres)

use std::num::NonZeroU32;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::noyau::Demande;

/// Précision par défaut (chiffres décimaux).
pub const CHIFFRES_DEFAUT: &str = "1000";

/// Filtre du journal quand ni --journal ni RUST_LOG ne sont donnés.
const JOURNAL_DEFAUT: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "pi12",
    version,
    about = "Calcule π (formule de Machin) puis l’écrit en base douze (0–9, A, B)"
)]
pub struct Cli {
    /// Nombre de chiffres décimaux de π à calculer avant la conversion
    #[arg(
        value_name = "CHIFFRES",
        default_value = CHIFFRES_DEFAUT,
        value_parser = lire_precision,
        allow_hyphen_values = true
    )]
    pub chiffres: NonZeroU32,

    /// Écrit aussi π en base 10 (arrondi à CHIFFRES) avant la ligne base 12
    #[arg(long)]
    pub decimal: bool,

    /// Affiche le temps d’exécution (ms) sur stderr
    #[arg(long)]
    pub chrono: bool,

    /// Filtre du journal (ex: "debug", "pi_base_douze=trace") ; sinon RUST_LOG
    #[arg(long, value_name = "DIRECTIVE")]
    pub journal: Option<String>,
}

impl Cli {
    pub fn demande(&self) -> Demande {
        Demande {
            chiffres: self.chiffres,
            base10: self.decimal,
        }
    }
}

fn lire_precision(s: &str) -> Result<NonZeroU32, String> {
    const MESSAGE: &str = "donnez un nombre entier positif de chiffres décimaux";

    let n: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("{s:?} : {MESSAGE}"))?;
    NonZeroU32::new(n).ok_or_else(|| format!("0 : {MESSAGE}"))
}

/// Installe le subscriber `tracing` (fmt → stderr).
pub fn initialiser_journal(
    directive: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filtre = match directive {
        Some(d) => EnvFilter::try_new(d)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(JOURNAL_DEFAUT)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;

    fn lire(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pi12").chain(args.iter().copied()))
    }

    #[test]
    fn defaut_mille() {
        let cli = lire(&[]).unwrap();
        assert_eq!(cli.chiffres.get(), 1000);
        assert!(!cli.decimal);
        assert!(!cli.chrono);
        assert!(cli.journal.is_none());
    }

    #[test]
    fn precision_et_options() {
        let cli = lire(&["250", "--decimal", "--chrono", "--journal", "debug"]).unwrap();
        assert_eq!(cli.chiffres.get(), 250);
        assert_eq!(cli.journal.as_deref(), Some("debug"));

        let d = cli.demande();
        assert_eq!(d.chiffres.get(), 250);
        assert!(d.base10);
    }

    #[test]
    fn precision_invalide() {
        for arg in ["0", "abc", "3.5"] {
            let err = lire(&[arg]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "arg={arg:?}");
            assert_ne!(err.exit_code(), 0);
        }

        // négatif : refusé aussi (jamais transmis au noyau)
        let err = lire(&["-5"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn directive_invalide() {
        assert!(initialiser_journal(Some("pi_base_douze=bavard")).is_err());
    }
}
