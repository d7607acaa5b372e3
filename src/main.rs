// src/main.rs
//
// pi12 — point d’entrée CLI
// -------------------------
// - stdout : "3." puis les chiffres base 12 (et la ligne base 10 si --decimal)
// - stderr : journal, temps d’exécution (--chrono), erreurs
// - précision invalide : clap affiche l’erreur et sort avec un code ≠ 0

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use pi_base_douze::config::{initialiser_journal, Cli};
use pi_base_douze::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = initialiser_journal(cli.journal.as_deref()) {
        eprintln!("journal : {e}");
        return ExitCode::FAILURE;
    }

    let mut sortie = BufWriter::new(io::stdout().lock());
    match run(&cli.demande(), &mut sortie) {
        Ok(bilan) => {
            if cli.chrono {
                eprintln!("{} ms", bilan.duree.as_millis());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(%e, "calcul interrompu");
            eprintln!("Erreur : {e}");
            ExitCode::FAILURE
        }
    }
}
