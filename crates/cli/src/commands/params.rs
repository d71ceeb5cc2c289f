//! Commande params: affiche les enregistrements Boulder-IO

use crate::DesignInput;
use anyhow::Result;
use primered_core::DesignParameters;

pub fn run(input: DesignInput) -> Result<()> {
    let settings = input.engine_settings();

    for request in input.requests()? {
        let (_, params) = DesignParameters::from_request(&request, &settings)?;
        print!("{}", params.to_record().encode()?);
    }

    Ok(())
}
