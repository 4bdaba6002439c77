use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = souq_api::Args::parse();

	souq_api::run(args).await
}
