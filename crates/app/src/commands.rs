//! Subcommand implementations.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use futures::future::join_all;
use vellum_application::ApplicationResult;
use vellum_application::ports::{DocumentCodec, FileSystem};
use vellum_application::use_cases::{
    LoadCollection, LoadEnvironment, LoadRequest, SaveCollection, SaveCollectionInput,
    SaveEnvironment, SaveRequest, ScanCollection,
};
use vellum_domain::{CollectionRoot, Environment, RequestItem};
use vellum_infrastructure::{DispatchConfig, QueuedCodec, TokioFileSystem, from_json, to_json_stable};

use crate::cli::{Command, Kind, is_folder_file};

type CommandResult = Result<ExitCode, Box<dyn Error>>;

/// A file loaded as one of the three variants.
enum Loaded {
    Request(RequestItem),
    Environment(Environment),
    Collection(CollectionRoot),
}

/// Shared adapters for every command.
pub struct Context {
    codec: QueuedCodec,
    fs: TokioFileSystem,
}

impl Context {
    /// Starts the dispatch queue.
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            codec: QueuedCodec::start(config),
            fs: TokioFileSystem::new(),
        }
    }

    /// Runs a subcommand.
    pub async fn run(&self, command: Command) -> CommandResult {
        match command {
            Command::Parse { file, kind } => self.parse(&file, kind).await,
            Command::Serialize { file, kind, folder } => self.serialize(&file, kind, folder).await,
            Command::Fmt {
                file,
                kind,
                folder,
                write,
            } => self.fmt(&file, kind, folder, write).await,
            Command::Check { files, kind } => Ok(self.check(files, kind).await),
            Command::Scan { dir } => self.scan(&dir).await,
        }
    }

    async fn load(&self, path: &Path, kind: Kind) -> ApplicationResult<Loaded> {
        let codec = self.codec.clone();
        Ok(match kind {
            Kind::Request => Loaded::Request(LoadRequest::new(codec, self.fs).execute(path).await?),
            Kind::Environment => {
                Loaded::Environment(LoadEnvironment::new(codec, self.fs).execute(path).await?)
            }
            Kind::Collection => {
                Loaded::Collection(LoadCollection::new(codec, self.fs).execute(path).await?)
            }
        })
    }

    async fn parse(&self, file: &Path, kind: Option<Kind>) -> CommandResult {
        let kind = kind.unwrap_or_else(|| Kind::detect(file));
        let json = match self.load(file, kind).await? {
            Loaded::Request(item) => to_json_stable(&item)?,
            Loaded::Environment(environment) => to_json_stable(&environment)?,
            Loaded::Collection(collection) => to_json_stable(&collection)?,
        };
        print!("{json}");
        Ok(ExitCode::SUCCESS)
    }

    async fn serialize(&self, file: &Path, kind: Kind, folder: bool) -> CommandResult {
        let json = self.fs.read_file_string(file).await?;
        let text = match kind {
            Kind::Request => {
                self.codec
                    .serialize_request(from_json::<RequestItem>(&json)?)
                    .await?
            }
            Kind::Environment => {
                self.codec
                    .serialize_environment(from_json::<Environment>(&json)?)
                    .await?
            }
            Kind::Collection => {
                self.codec
                    .serialize_collection(from_json::<CollectionRoot>(&json)?, folder)
                    .await?
            }
        };
        print!("{text}");
        Ok(ExitCode::SUCCESS)
    }

    async fn fmt(&self, file: &Path, kind: Option<Kind>, folder: bool, write: bool) -> CommandResult {
        let kind = kind.unwrap_or_else(|| Kind::detect(file));
        let is_folder = folder || is_folder_file(file);
        let loaded = self.load(file, kind).await?;

        if write {
            let codec = self.codec.clone();
            match loaded {
                Loaded::Request(item) => SaveRequest::new(codec, self.fs).execute(file, item).await?,
                Loaded::Environment(environment) => {
                    SaveEnvironment::new(codec, self.fs)
                        .execute(file, environment)
                        .await?;
                }
                Loaded::Collection(collection) => {
                    SaveCollection::new(codec, self.fs)
                        .execute(
                            file,
                            SaveCollectionInput {
                                collection,
                                is_folder,
                            },
                        )
                        .await?;
                }
            }
            tracing::info!(file = %file.display(), "formatted");
            return Ok(ExitCode::SUCCESS);
        }

        let text = match loaded {
            Loaded::Request(item) => self.codec.serialize_request(item).await?,
            Loaded::Environment(environment) => {
                self.codec.serialize_environment(environment).await?
            }
            Loaded::Collection(collection) => {
                self.codec.serialize_collection(collection, is_folder).await?
            }
        };
        print!("{text}");
        Ok(ExitCode::SUCCESS)
    }

    async fn check(&self, files: Vec<PathBuf>, kind: Option<Kind>) -> ExitCode {
        let checks = files.iter().map(|file| {
            let kind = kind.unwrap_or_else(|| Kind::detect(file));
            self.load(file, kind)
        });
        let results = join_all(checks).await;

        let mut failed = 0_usize;
        for (file, result) in files.iter().zip(results) {
            match result {
                Ok(_) => println!("ok      {}", file.display()),
                Err(error) => {
                    failed += 1;
                    println!("failed  {}: {error}", file.display());
                }
            }
        }

        if failed == 0 {
            ExitCode::SUCCESS
        } else {
            eprintln!("{failed} of {} files failed", files.len());
            ExitCode::FAILURE
        }
    }

    async fn scan(&self, dir: &Path) -> CommandResult {
        let scan = ScanCollection::new(self.codec.clone(), self.fs)
            .execute(dir)
            .await?;

        println!("collection: {}", dir.display());
        println!(
            "root:         {}",
            if scan.collection.is_some() { "yes" } else { "no" }
        );
        println!("folders:      {}", scan.folders.len());
        println!("environments: {}", scan.environments.len());
        println!("requests:     {}", scan.requests.len());

        let mut requests: Vec<_> = scan.requests.iter().collect();
        requests.sort_by_key(|file| (file.path.parent().map(Path::to_path_buf), file.value.seq));
        for file in requests {
            let relative = file.path.strip_prefix(dir).unwrap_or(&file.path);
            println!(
                "  {:<7} {} ({})",
                file.value.request.method,
                file.value.name,
                relative.display()
            );
        }

        if scan.is_clean() {
            return Ok(ExitCode::SUCCESS);
        }
        println!("failures:     {}", scan.failures.len());
        for failure in &scan.failures {
            println!("  {}: {}", failure.path.display(), failure.error);
        }
        Ok(ExitCode::FAILURE)
    }
}
