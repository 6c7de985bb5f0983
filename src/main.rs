use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod config;
pub mod stack;
pub mod template;

#[derive(Parser, Debug)]
#[command(name = "cfn-stack-deployer")]
#[command(about = "Deploys a CFN stack across a list of regions", long_about = None)]
struct Cli {
    /// Base stack name; also passed as the BucketNameParam parameter value
    stack_name: String,

    /// JSON file with a "regionList" array of target regions
    regions_file: PathBuf,

    /// CloudFormation template, forwarded to the API unmodified
    template_file: PathBuf,

    /// Pass "delete" to tear down existing stacks instead of updating them
    #[arg(value_enum)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Mode {
    Delete,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let delete_requested = cli.mode == Some(Mode::Delete);

    let regions = config::load_regions(&cli.regions_file)?;

    // One region at a time, in file order. A failed call aborts the run
    // before the remaining regions are touched.
    for region in &regions {
        let stack = stack::Stack::new(region, &cli.stack_name).await;

        match stack::decide(stack.exists().await?, delete_requested) {
            stack::Action::Create => {
                let template_body = template::read(&cli.template_file)?;
                stack.create(&template_body, &cli.stack_name).await?;
            }
            stack::Action::Update => {
                let template_body = template::read(&cli.template_file)?;
                stack.update(&template_body, &cli.stack_name).await?;
            }
            stack::Action::Delete => {
                stack.delete().await?;
            }
        }
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use super::Mode;

    #[test]
    fn missing_arguments() {
        let result = Cli::try_parse_from(["cfn-stack-deployer", "demo", "regions.json"]);

        assert_eq!(true, result.is_err());
    }

    #[test]
    fn parses_without_a_mode() {
        let cli = Cli::try_parse_from([
            "cfn-stack-deployer",
            "demo",
            "regions.json",
            "template.yaml",
        ])
        .unwrap();

        assert_eq!("demo", cli.stack_name);
        assert_eq!(None, cli.mode);
    }

    #[test]
    fn parses_the_delete_mode() {
        let cli = Cli::try_parse_from([
            "cfn-stack-deployer",
            "demo",
            "regions.json",
            "template.yaml",
            "delete",
        ])
        .unwrap();

        assert_eq!(Some(Mode::Delete), cli.mode);
    }

    #[test]
    fn rejects_an_unknown_mode() {
        let result = Cli::try_parse_from([
            "cfn-stack-deployer",
            "demo",
            "regions.json",
            "template.yaml",
            "destroy",
        ]);

        assert_eq!(true, result.is_err());
    }
}
