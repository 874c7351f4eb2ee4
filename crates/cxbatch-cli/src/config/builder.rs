use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FilePlanConfig};
use super::models::{AppConfig, HostConfig};
use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use cxbatch::core::selection::{ChainGroup, GroupPair};
use cxbatch::core::variant::{AnalysisVariant, VariantError};
use cxbatch::engine::config::{BatchConfigBuilder, CustomPlanConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Host connection overrides that only the `run` subcommand exposes.
#[derive(Debug, Default, Clone)]
pub struct HostOverrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn build_config(args: &BatchArgs, host_args: &HostOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    debug!("Merged file configuration: {:?}", &file_config);

    let manifest_path = args
        .manifest
        .clone()
        .or(file_config.manifest.take())
        .unwrap_or_else(|| PathBuf::from(&defaults.manifest));

    let working_directory = match args
        .workdir
        .as_deref()
        .or(file_config.working_directory.as_deref())
    {
        Some(dir) => Some(resolve_working_directory(dir)?),
        None => None,
    };

    let groups_file = file_config.groups.take().unwrap_or_default();
    let group_a = match (&args.group_a, groups_file.a) {
        (Some(spec), _) => parse_group(spec, "group-a")?,
        (None, Some(group)) => group,
        (None, None) => parse_group(&defaults.group_a, "group-a")?,
    };
    let group_b = match (&args.group_b, groups_file.b) {
        (Some(spec), _) => parse_group(spec, "group-b")?,
        (None, Some(group)) => group,
        (None, None) => parse_group(&defaults.group_b, "group-b")?,
    };

    let variant = match (&args.variant, file_config.variant) {
        (Some(name), _) => parse_variant(name)?,
        (None, Some(variant)) => variant,
        (None, None) => parse_variant(&defaults.variant)?,
    };

    let exit_when_done = args.exit_when_done || file_config.exit_when_done.unwrap_or(false);

    let plan_file = file_config.plan.take().unwrap_or_default();
    let executable_links = plan_file.executable_links.unwrap_or(false);
    let (custom_plan, suffix_override) = split_plan_table(plan_file, &defaults)?;

    let batch = BatchConfigBuilder::new()
        .manifest_path(manifest_path)
        .variant(variant)
        .groups(GroupPair::new(group_a, group_b))
        .custom_plan(custom_plan)
        .output_suffix(suffix_override)
        .working_directory(working_directory.clone())
        .exit_when_done(exit_when_done)
        .executable_links(executable_links)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let host_file = file_config.host.take().unwrap_or_default();
    let host = HostConfig {
        url: host_args
            .url
            .clone()
            .or(host_file.url)
            .unwrap_or(defaults.host_url),
        timeout: Duration::from_secs(
            host_args
                .timeout_secs
                .or(host_file.timeout_secs)
                .unwrap_or(defaults.timeout_secs),
        ),
    };

    Ok(AppConfig {
        working_directory,
        host,
        batch,
    })
}

fn resolve_working_directory(dir: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(dir).map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Working directory {:?} is not accessible: {}", dir, e),
        ))
    })
}

fn parse_group(spec: &str, kind: &str) -> Result<ChainGroup> {
    ChainGroup::new(spec).map_err(|e| CliError::Argument(format!("{}: {}", kind, e)))
}

fn parse_variant(name: &str) -> Result<AnalysisVariant> {
    name.parse().map_err(|e: VariantError| CliError::Argument(e.to_string()))
}

/// A `[plan]` table with commands is a custom plan; without commands it can
/// only rename the built-in variant's output.
fn split_plan_table(
    file_val: FilePlanConfig,
    defaults: &DefaultsConfig,
) -> Result<(Option<CustomPlanConfig>, Option<String>)> {
    if file_val.commands.is_empty() {
        if file_val.name.is_some() {
            return Err(CliError::Config(
                "`plan.name` requires `plan.commands`; built-in variants keep their own name"
                    .to_string(),
            ));
        }
        return Ok((None, file_val.output_suffix));
    }
    let output_suffix = file_val.output_suffix.ok_or_else(|| {
        CliError::Config("`plan.commands` requires `plan.output-suffix`".to_string())
    })?;
    let custom = CustomPlanConfig {
        name: file_val
            .name
            .unwrap_or_else(|| defaults.custom_plan_name.clone()),
        output_suffix,
        commands: file_val.commands,
    };
    Ok((Some(custom), None))
}

fn set_group(value: &str) -> Result<ChainGroup> {
    ChainGroup::new(value).map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let invalid = |e: parser::ParseError| CliError::Config(e.to_string());

        match key {
            "manifest" => config.manifest = Some(PathBuf::from(value)),
            "working-directory" => config.working_directory = Some(PathBuf::from(value)),
            "variant" => {
                config.variant = Some(
                    value
                        .parse()
                        .map_err(|e: VariantError| CliError::Config(e.to_string()))?,
                )
            }
            "exit-when-done" => {
                config.exit_when_done = Some(parser::parse_bool(key, value).map_err(invalid)?)
            }
            "groups.a" => {
                config.groups.get_or_insert_with(Default::default).a = Some(set_group(value)?)
            }
            "groups.b" => {
                config.groups.get_or_insert_with(Default::default).b = Some(set_group(value)?)
            }
            "host.url" => {
                config.host.get_or_insert_with(Default::default).url = Some(value.to_string())
            }
            "host.timeout-secs" => {
                config.host.get_or_insert_with(Default::default).timeout_secs =
                    Some(parser::parse_u64(key, value).map_err(invalid)?)
            }
            "plan.output-suffix" => {
                config
                    .plan
                    .get_or_insert_with(Default::default)
                    .output_suffix = Some(value.to_string())
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn texts(app: &AppConfig) -> Vec<String> {
        app.batch
            .plan
            .analysis
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&BatchArgs::default(), &HostOverrides::default()).unwrap();

        assert_eq!(
            app.batch.manifest_path,
            PathBuf::from("all_Relaxed_files.txt")
        );
        assert_eq!(app.batch.plan.name, "interface-contact");
        assert_eq!(app.batch.plan.output_suffix, "_intResidues.txt");
        assert_eq!(texts(&app)[0], "interfaces select /A contacting /B");
        assert!(!app.batch.plan.exit_when_done);
        assert!(app.working_directory.is_none());
        assert_eq!(app.host.url, DefaultsConfig::default().host_url);
        assert_eq!(
            app.host.timeout,
            Duration::from_secs(DefaultsConfig::default().timeout_secs)
        );
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        let toml = format!(
            r#"
            manifest = "list.txt"
            working-directory = "{}"
            variant = "no-minimum-area"
            exit-when-done = true

            [groups]
            a = "H,L"
            b = "C"

            [host]
            url = "http://10.0.0.2:61000"
            timeout-secs = 45
            "#,
            dir.path().display()
        );
        fs::write(&cfg_path, toml).unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            ..BatchArgs::default()
        };
        let app = build_config(&args, &HostOverrides::default()).unwrap();

        assert_eq!(app.batch.manifest_path, PathBuf::from("list.txt"));
        assert_eq!(app.batch.plan.output_suffix, "_intResidues_noMinArea.txt");
        assert_eq!(
            texts(&app)[0],
            "interfaces select /H,L & ::polymer_type>0 contacting /C & ::polymer_type>0 areaCutoff 0"
        );
        assert!(app.batch.plan.exit_when_done);
        let canonical = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(app.working_directory, Some(canonical.clone()));
        assert_eq!(app.batch.plan.working_directory, Some(canonical));
        assert_eq!(app.host.url, "http://10.0.0.2:61000");
        assert_eq!(app.host.timeout, Duration::from_secs(45));
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        fs::write(
            &cfg_path,
            "variant = \"hbonds\"\n[groups]\na = \"H\"\n[host]\nurl = \"http://file:1\"\n",
        )
        .unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            variant: Some("interface-contact".to_string()),
            group_a: Some("D".to_string()),
            manifest: Some(PathBuf::from("cli.txt")),
            ..BatchArgs::default()
        };
        let host = HostOverrides {
            url: Some("http://cli:2".to_string()),
            timeout_secs: Some(5),
        };
        let app = build_config(&args, &host).unwrap();

        assert_eq!(app.batch.plan.name, "interface-contact");
        assert_eq!(texts(&app)[0], "interfaces select /D contacting /B");
        assert_eq!(app.batch.manifest_path, PathBuf::from("cli.txt"));
        assert_eq!(app.host.url, "http://cli:2");
        assert_eq!(app.host.timeout, Duration::from_secs(5));
    }

    #[test]
    fn set_values_override_file() {
        let args = BatchArgs {
            set_values: vec![
                "variant=hbonds".to_string(),
                "groups.b=C".to_string(),
                "exit-when-done=yes".to_string(),
                "host.timeout-secs=9".to_string(),
                "manifest=set.txt".to_string(),
            ],
            ..BatchArgs::default()
        };
        let app = build_config(&args, &HostOverrides::default()).unwrap();

        assert_eq!(app.batch.plan.name, "hydrogen-bond");
        assert_eq!(
            texts(&app),
            vec![
                "hbonds (/A & protein) restrict (/C & protein) reveal true showDist true select true log true"
            ]
        );
        assert!(app.batch.plan.exit_when_done);
        assert_eq!(app.host.timeout, Duration::from_secs(9));
        assert_eq!(app.batch.manifest_path, PathBuf::from("set.txt"));
    }

    #[test]
    fn custom_plan_from_file_replaces_variant() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        fs::write(
            &cfg_path,
            r#"
            variant = "hbonds"
            [plan]
            name = "contacts-c"
            output-suffix = "_contactsC.txt"
            commands = ["interfaces select /A contacting /C", "info selection level residue"]
            "#,
        )
        .unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            ..BatchArgs::default()
        };
        let app = build_config(&args, &HostOverrides::default()).unwrap();

        assert_eq!(app.batch.plan.name, "contacts-c");
        assert_eq!(
            app.batch.plan.output_path_for("x.pdb"),
            "x.pdb_contactsC.txt"
        );
        assert_eq!(texts(&app).len(), 2);
    }

    #[test]
    fn custom_plan_needs_suffix() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        fs::write(&cfg_path, "[plan]\ncommands = [\"log text hi\"]\n").unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            ..BatchArgs::default()
        };
        let err = build_config(&args, &HostOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn suffix_override_without_commands_renames_variant_output() {
        let args = BatchArgs {
            variant: Some("hbonds".to_string()),
            set_values: vec!["plan.output-suffix=_x.txt".to_string()],
            ..BatchArgs::default()
        };
        let app = build_config(&args, &HostOverrides::default()).unwrap();

        assert_eq!(app.batch.plan.name, "hydrogen-bond");
        assert_eq!(app.batch.plan.output_path_for("m.pdb"), "m.pdb_x.txt");
        assert_eq!(texts(&app).len(), 1);
    }

    #[test]
    fn plan_table_with_only_links_keeps_variant() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        fs::write(&cfg_path, "[plan]\nexecutable-links = true\n").unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            ..BatchArgs::default()
        };
        let app = build_config(&args, &HostOverrides::default()).unwrap();

        assert_eq!(app.batch.plan.name, "interface-contact");
        assert_eq!(app.batch.plan.output_suffix, "_intResidues.txt");
        assert!(app.batch.plan.executable_links);
    }

    #[test]
    fn plan_name_without_commands_is_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("cxbatch.toml");
        fs::write(&cfg_path, "[plan]\nname = \"renamed\"\n").unwrap();

        let args = BatchArgs {
            config: Some(cfg_path),
            ..BatchArgs::default()
        };
        let err = build_config(&args, &HostOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("plan.commands"));
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let bad_variant = BatchArgs {
            variant: Some("sasa".to_string()),
            ..BatchArgs::default()
        };
        assert!(matches!(
            build_config(&bad_variant, &HostOverrides::default()),
            Err(CliError::Argument(_))
        ));

        let bad_group = BatchArgs {
            group_b: Some("B C".to_string()),
            ..BatchArgs::default()
        };
        assert!(matches!(
            build_config(&bad_group, &HostOverrides::default()),
            Err(CliError::Argument(_))
        ));

        let bad_set_group = BatchArgs {
            set_values: vec!["groups.b=B C".to_string()],
            ..BatchArgs::default()
        };
        assert!(matches!(
            build_config(&bad_set_group, &HostOverrides::default()),
            Err(CliError::Config(_))
        ));

        let bad_file_variant = {
            let dir = tempdir().unwrap();
            let cfg_path = dir.path().join("cxbatch.toml");
            fs::write(&cfg_path, "variant = \"sasa\"\n").unwrap();
            let args = BatchArgs {
                config: Some(cfg_path),
                ..BatchArgs::default()
            };
            build_config(&args, &HostOverrides::default())
        };
        assert!(matches!(
            bad_file_variant,
            Err(CliError::FileParsing { .. })
        ));

        let bad_key = BatchArgs {
            set_values: vec!["groups.c=C".to_string()],
            ..BatchArgs::default()
        };
        assert!(matches!(
            build_config(&bad_key, &HostOverrides::default()),
            Err(CliError::Config(_))
        ));

        let bad_format = BatchArgs {
            set_values: vec!["variant".to_string()],
            ..BatchArgs::default()
        };
        assert!(matches!(
            build_config(&bad_format, &HostOverrides::default()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn missing_working_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let args = BatchArgs {
            workdir: Some(dir.path().join("does-not-exist")),
            ..BatchArgs::default()
        };
        let err = build_config(&args, &HostOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
