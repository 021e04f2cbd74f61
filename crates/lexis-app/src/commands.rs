use anyhow::Context;
use lexis_config::Config;
use lexis_import::{ImportError, ImportOutcome, Importer, provision};
use lexis_lookup::DictionaryApiClient;
use lexis_store::{JsonFileStore, StoreError};

async fn open_store(config: &Config) -> anyhow::Result<JsonFileStore> {
    JsonFileStore::open(&config.store.path)
        .await
        .with_context(|| format!("Failed to open store {}", config.store.path.display()))
}

/// `setup`: provision the dictionary entry content type
pub async fn setup(config: &Config) -> anyhow::Result<()> {
    println!("Setting up Dictionary Entry content type and fields...");

    let result = async {
        let store = open_store(config).await?;
        Ok::<_, anyhow::Error>(provision(&store).await?)
    }
    .await;

    match result {
        Ok(report) => {
            for step in &report.steps {
                println!("{step}");
            }
            println!("Setup complete!");
            Ok(())
        }
        Err(e) => {
            println!("Error during setup: {e:#}");
            Err(e)
        }
    }
}

/// `import <word>`: fetch one word and upsert its entry
pub async fn import(config: &Config, word: &str) -> anyhow::Result<()> {
    println!("Importing word: {word}");

    match import_word(config, word).await {
        Ok(outcome) => {
            println!("{}", outcome_line(word, &outcome));
            Ok(())
        }
        Err(e) => {
            println!("Error importing word: {e:#}");
            Err(e)
        }
    }
}

async fn import_word(config: &Config, word: &str) -> anyhow::Result<ImportOutcome> {
    let client = DictionaryApiClient::from_config(&config.api)
        .context("Failed to build dictionary API client")?;
    let store = open_store(config).await?;
    let importer = Importer::new(client, store);

    match importer.import(word).await {
        Err(e @ ImportError::Store(StoreError::UnknownContentType(_))) => {
            Err(anyhow::Error::new(e).context("Dictionary store is not set up, run `lexis setup` first"))
        }
        other => Ok(other?),
    }
}

fn outcome_line(word: &str, outcome: &ImportOutcome) -> String {
    match outcome {
        ImportOutcome::Created(_) | ImportOutcome::Updated(_) => {
            format!("Successfully imported: {word}")
        }
        ImportOutcome::NotFound => {
            format!("Failed to import: {word} (word not found in external API)")
        }
        ImportOutcome::NoDefinitions => {
            format!("Failed to import: {word} (no definitions in external API)")
        }
    }
}
