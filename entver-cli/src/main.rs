// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


mod cmds;
mod commands;

use clap::Parser;
use commands::Commands;
use entver_base::common::Logger;
use entver_base::CommonResult;
use entver_common::conf::EntverConf;
use entver_common::version;

#[derive(Parser, Debug)]
#[command(author, version = version::VERSION, about, long_about = None)]
pub struct EntverArgs {
    /// Configuration file path (optional)
    #[arg(
        short,
        long,
        help = "Configuration file path (optional)",
        global = true
    )]
    pub conf: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl EntverArgs {
    pub fn get_conf(&self) -> CommonResult<EntverConf> {
        EntverConf::load(self.conf.as_deref())
    }
}

fn main() -> CommonResult<()> {
    let args = EntverArgs::parse();

    let conf = args.get_conf()?;
    Logger::init(conf.log.clone());

    let result = match args.command {
        Commands::Parse(cmd) => cmd.execute(),
        Commands::Compare(cmd) => cmd.execute(),
        Commands::Sort(cmd) => cmd.execute(),
        Commands::Check(cmd) => cmd.execute(&conf),
        Commands::Version => {
            println!("entver {}", version::VERSION);
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        EntverArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = EntverArgs::try_parse_from([
            "entver", "--conf", "entver.toml", "sort", "-r", "1.2.5", "1.2.5-alpha.2",
        ])
        .unwrap();
        assert_eq!(args.conf.as_deref(), Some("entver.toml"));
        assert!(matches!(args.command, Commands::Sort(_)));

        assert!(EntverArgs::try_parse_from(["entver", "compare", "1.2.5"]).is_err());
        assert!(EntverArgs::try_parse_from(["entver", "parse"]).is_err());
    }
}
