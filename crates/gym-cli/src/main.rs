
use anyhow::Result;

use gym_cli::cli::{Cli, Command};
use gym_cli::logging;
use gym_db::{connection, MemberStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::init();
    logging::init(&cli.log_level);

    let conn = connection::open(&cli.members_db).await?;
    let mut store = MemberStore::load(conn).await;
    let clock = cli.clock();

    match cli.command {
        Command::List(cmd) => cmd.run(&store, &clock),
        Command::Show(cmd) => cmd.run(&store),
        Command::Stats(cmd) => cmd.run(&store, &clock),
        Command::Add(cmd) => cmd.run(&mut store, &clock).await,
        Command::Update(cmd) => cmd.run(&mut store, &clock).await,
        Command::Delete(cmd) => cmd.run(&mut store).await,
        Command::Pay(cmd) => cmd.run(&mut store, &clock).await,
    }?;

    Ok(())
}
