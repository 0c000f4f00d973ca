use clap::{Args, Parser, Subcommand};
use nyt_books::config::{self, log};
use nyt_books::{Client, Context, ListDate, QueryParam};
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nyt-books", about = "New York Times Books API 조회")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    options: CallOptions,
}

#[derive(Args)]
struct CallOptions {
    /// 추가 쿼리 파라미터 (ex. -p offset=20)
    #[arg(short = 'p', long = "param", value_parser = parse_param, global = true)]
    params: Vec<(String, String)>,

    /// 요청 타임아웃(초)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// 최신 Best Sellers 목록
    List,
    /// 날짜별 Best Sellers 목록
    ListByDate {
        /// YYYY-MM-DD 또는 current
        #[arg(value_parser = ListDate::parse)]
        date: ListDate,
        /// 목록 이름 (ex. hardcover-fiction)
        list: String,
    },
    /// Best Sellers 히스토리
    History,
    /// Best Sellers 목록 이름
    Names,
    /// 모든 목록의 상위 5권
    Overview,
    /// 도서 리뷰
    Reviews,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("key=value 형식이어야 합니다: {}", s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    config::load_dotenv();
    let app_config = config::load_config()?;

    let log_config = app_config.logger().cloned().unwrap_or_default();
    let _guard = log::set_global_logging_config(&log_config)?;

    let client = app_config.client()?;
    let ctx = match cli.options.timeout {
        Some(secs) => Context::with_timeout(Duration::from_secs(secs)),
        None => Context::background(),
    };
    let params: QueryParam = cli.options.params.into_iter().collect();

    match run(&client, &ctx, cli.command, &params) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(err) => {
            error!("조회 중 에러가 발생 하였습니다. => {:?}", err);
            Err(err)
        }
    }
}

fn run(client: &Client, ctx: &Context, command: Command, params: &QueryParam) -> anyhow::Result<String> {
    let params = Some(params);
    let json = match command {
        Command::List => serde_json::to_string_pretty(&client.best_sellers_list(ctx, params)?)?,
        Command::ListByDate { date, list } => {
            info!(%date, list = %list, "list by date");
            serde_json::to_string_pretty(&client.best_sellers_list_by_date(ctx, date, &list, params)?)?
        }
        Command::History => serde_json::to_string_pretty(&client.best_sellers_list_history(ctx, params)?)?,
        Command::Names => serde_json::to_string_pretty(&client.list_names(ctx, params)?)?,
        Command::Overview => serde_json::to_string_pretty(&client.overview(ctx, params)?)?,
        Command::Reviews => serde_json::to_string_pretty(&client.reviews(ctx, params)?)?,
    };

    Ok(json)
}
