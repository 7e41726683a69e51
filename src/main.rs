use anyhow::anyhow;
use api_client::{
    AiAnalysisRequest, ApiError, ComparisonQuery, GatewayClient, IndustryQuery,
    PositionSizingRequest, RecordQuery, SummaryQuery, TimingIndicatorsRequest, TrendQuery,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use core_types::{IndicatorKind, IndustryRecord, MacroRecord, Market, SentimentRecord,
    TechnicalIndicators};
use futures::FutureExt;
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::theme::{Theme, ThemeStore, THEME_STATE_FILE};

mod output;
mod theme;

/// The main entry point for the kairos timing client.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load KAIROS_* overrides from a .env file, if one exists.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let mut theme_store = ThemeStore::load(THEME_STATE_FILE);

    // The theme command only touches local state, never the backend.
    if let Commands::Theme { command } = &cli.command {
        return handle_theme(command, &mut theme_store);
    }

    let settings = configuration::load_settings()?;
    let client = GatewayClient::new(&settings.api).map_err(surface)?;
    let theme = theme_store.theme();

    match cli.command {
        Commands::AddMacro(args) => handle_add_macro(&client, args, theme).await,
        Commands::ListMacro(args) => handle_list_macro(&client, args, theme).await,
        Commands::AddSentiment(args) => handle_add_sentiment(&client, args, theme).await,
        Commands::ListSentiment(args) => handle_list_sentiment(&client, args, theme).await,
        Commands::AddIndustry(args) => handle_add_industry(&client, args, theme).await,
        Commands::ListIndustry(args) => handle_list_industry(&client, args, theme).await,
        Commands::Calculate(args) => handle_calculate(&client, args, theme).await,
        Commands::AiAnalysis(args) => handle_ai_analysis(&client, args).await,
        Commands::Position(args) => handle_position(&client, args, theme).await,
        Commands::Compare(args) => handle_compare(&client, args, theme).await,
        Commands::Summary(args) => handle_summary(&client, args, theme).await,
        Commands::Trend(args) => handle_trend(&client, args, theme).await,
        Commands::Dashboard(args) => handle_dashboard(&client, args, theme).await,
        Commands::Health => handle_health(&client).await,
        Commands::Theme { .. } => unreachable!("handled above"),
    }
}

/// Carries a normalized client error to the user with its envelope code.
fn surface(err: ApiError) -> anyhow::Error {
    anyhow!("{err} (code {})", err.code())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal client for the quantitative market-timing backend.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a macro indicator record.
    AddMacro(AddMacroArgs),
    /// List stored macro indicator records.
    ListMacro(ListArgs),
    /// Submit a market-sentiment record.
    AddSentiment(AddSentimentArgs),
    /// List stored market-sentiment records.
    ListSentiment(ListArgs),
    /// Submit an industry-fundamental record.
    AddIndustry(AddIndustryArgs),
    /// List stored industry records.
    ListIndustry(ListIndustryArgs),
    /// Compute timing indicators for a market on a date.
    Calculate(MarketDateArgs),
    /// Request an AI-generated analysis of the timing indicators.
    AiAnalysis(AiAnalysisArgs),
    /// Compute a position-sizing suggestion.
    Position(PositionArgs),
    /// Compare timing scores across markets.
    Compare(CompareArgs),
    /// Fetch the analysis summary for a market.
    Summary(SummaryArgs),
    /// Fetch the timing-score trend series.
    Trend(TrendArgs),
    /// Fetch the dashboard aggregate for a market.
    Dashboard(SummaryArgs),
    /// Probe the liveness of the three backend services.
    Health,
    /// Show or change the display theme.
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme.
    Show,
    /// Flip between light and dark.
    Toggle,
    /// Set the theme explicitly.
    Set { theme: Theme },
}

#[derive(Parser)]
struct AddMacroArgs {
    /// The observation date (format: YYYY-MM-DD).
    #[arg(long)]
    date: NaiveDate,
    /// The market (a_share, hong_kong, nasdaq).
    #[arg(long)]
    market: Market,
    #[arg(long)]
    pmi: Option<Decimal>,
    #[arg(long)]
    cpi: Option<Decimal>,
    #[arg(long)]
    ppi: Option<Decimal>,
    #[arg(long)]
    m2: Option<Decimal>,
    #[arg(long)]
    interest_rate: Option<Decimal>,
}

#[derive(Parser)]
struct AddSentimentArgs {
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    market: Market,
    #[arg(long)]
    volatility: Option<Decimal>,
    #[arg(long)]
    investor_sentiment: Option<Decimal>,
    #[arg(long)]
    rsi: Option<Decimal>,
    #[arg(long)]
    macd: Option<Decimal>,
    #[arg(long)]
    bollinger_bands: Option<Decimal>,
}

#[derive(Parser)]
struct AddIndustryArgs {
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    market: Market,
    /// The industry the record covers (e.g., "technology").
    #[arg(long)]
    industry: String,
    #[arg(long)]
    free_cash_flow: Option<Decimal>,
    #[arg(long)]
    industry_sentiment: Option<Decimal>,
}

#[derive(Parser)]
struct ListArgs {
    #[arg(long)]
    market: Option<Market>,
    /// Start of the date range (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End of the date range (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct ListIndustryArgs {
    #[arg(long)]
    market: Option<Market>,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    from: Option<NaiveDate>,
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct MarketDateArgs {
    #[arg(long)]
    market: Market,
    #[arg(long)]
    date: NaiveDate,
}

#[derive(Parser)]
struct AiAnalysisArgs {
    #[arg(long)]
    market: Market,
    #[arg(long)]
    date: NaiveDate,
    /// Also ask the backend for a position suggestion.
    #[arg(long)]
    include_position_sizing: bool,
}

#[derive(Parser)]
struct PositionArgs {
    #[arg(long)]
    market: Market,
    #[arg(long)]
    date: NaiveDate,
    /// The timing score to size against (0-100).
    #[arg(long)]
    score: Decimal,
    /// Available capital; the backend defaults it when omitted.
    #[arg(long)]
    capital: Option<Decimal>,
    /// Risk per trade, as a percentage.
    #[arg(long)]
    risk: Option<Decimal>,
}

#[derive(Parser)]
struct CompareArgs {
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Markets to compare, comma-separated.
    #[arg(long, value_delimiter = ',')]
    markets: Vec<Market>,
}

#[derive(Parser)]
struct SummaryArgs {
    #[arg(long)]
    market: Market,
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Parser)]
struct TrendArgs {
    #[arg(long)]
    market: Market,
    #[arg(long)]
    from: Option<NaiveDate>,
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Which series to fetch (overall, macro, industry, sentiment).
    #[arg(long)]
    indicator: Option<IndicatorKind>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_add_macro(
    client: &GatewayClient,
    args: AddMacroArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let record = MacroRecord {
        id: None,
        date: args.date,
        market: args.market,
        pmi: args.pmi,
        cpi: args.cpi,
        ppi: args.ppi,
        m2: args.m2,
        interest_rate: args.interest_rate,
        other_macro: None,
        created_at: None,
    };

    let response = client
        .data_input()
        .add_macro_data(&record)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::macro_table(&[response.data], theme));
    Ok(())
}

async fn handle_list_macro(
    client: &GatewayClient,
    args: ListArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = RecordQuery {
        market: args.market,
        start_date: args.from,
        end_date: args.to,
    };
    let response = client
        .data_input()
        .fetch_macro_data(&query)
        .await
        .map_err(surface)?;
    println!("{} record(s)", response.count);
    println!("{}", output::macro_table(&response.data, theme));
    Ok(())
}

async fn handle_add_sentiment(
    client: &GatewayClient,
    args: AddSentimentArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let technical = TechnicalIndicators {
        rsi: args.rsi,
        macd: args.macd,
        bollinger_bands: args.bollinger_bands,
    };
    let record = SentimentRecord {
        id: None,
        date: args.date,
        market: args.market,
        volatility: args.volatility,
        investor_sentiment: args.investor_sentiment,
        technical_indicators: (technical != TechnicalIndicators::default()).then_some(technical),
        created_at: None,
    };

    let response = client
        .data_input()
        .add_market_sentiment(&record)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::sentiment_table(&[response.data], theme));
    Ok(())
}

async fn handle_list_sentiment(
    client: &GatewayClient,
    args: ListArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = RecordQuery {
        market: args.market,
        start_date: args.from,
        end_date: args.to,
    };
    let response = client
        .data_input()
        .fetch_market_sentiment(&query)
        .await
        .map_err(surface)?;
    println!("{} record(s)", response.count);
    println!("{}", output::sentiment_table(&response.data, theme));
    Ok(())
}

async fn handle_add_industry(
    client: &GatewayClient,
    args: AddIndustryArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let record = IndustryRecord {
        id: None,
        date: args.date,
        market: args.market,
        industry: args.industry,
        free_cash_flow: args.free_cash_flow,
        industry_sentiment: args.industry_sentiment,
        created_at: None,
    };

    let response = client
        .data_input()
        .add_industry_data(&record)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::industry_table(&[response.data], theme));
    Ok(())
}

async fn handle_list_industry(
    client: &GatewayClient,
    args: ListIndustryArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = IndustryQuery {
        market: args.market,
        industry: args.industry,
        start_date: args.from,
        end_date: args.to,
    };
    let response = client
        .data_input()
        .fetch_industry_data(&query)
        .await
        .map_err(surface)?;
    println!("{} record(s)", response.count);
    println!("{}", output::industry_table(&response.data, theme));
    Ok(())
}

async fn handle_calculate(
    client: &GatewayClient,
    args: MarketDateArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let request = TimingIndicatorsRequest {
        market: args.market,
        date: args.date,
        macro_data: None,
        industry_data: None,
        market_sentiment: None,
    };
    let response = client
        .analysis()
        .calculate_timing_indicators(&request)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::indicators_table(&[response.data], theme));
    Ok(())
}

async fn handle_ai_analysis(client: &GatewayClient, args: AiAnalysisArgs) -> anyhow::Result<()> {
    let request = AiAnalysisRequest {
        market: args.market,
        date: args.date,
        timing_indicators: None,
        include_position_sizing: args.include_position_sizing,
    };
    let response = client
        .analysis()
        .request_ai_analysis(&request)
        .await
        .map_err(surface)?;

    let analysis = response.data;
    println!("{}", response.message);
    if analysis.is_fallback {
        println!("(fallback analysis - the AI service was unavailable)");
    }
    println!("\nSummary: {}", analysis.summary);
    println!("Recommendation: {}", analysis.recommendation);
    println!(
        "Risk: {} | Horizon: {}",
        analysis.risk_level, analysis.time_horizon
    );
    println!("\n{}", analysis.ai_analysis);
    Ok(())
}

async fn handle_position(
    client: &GatewayClient,
    args: PositionArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let request = PositionSizingRequest {
        market: args.market,
        date: args.date,
        timing_score: args.score,
        available_capital: args.capital,
        risk_per_trade_percentage: args.risk,
    };
    let response = client
        .analysis()
        .calculate_position_sizing(&request)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::position_table(&response.data, theme));
    Ok(())
}

async fn handle_compare(
    client: &GatewayClient,
    args: CompareArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = ComparisonQuery {
        date: args.date,
        markets: (!args.markets.is_empty()).then_some(args.markets),
    };
    let response = client
        .analysis()
        .compare_markets(&query)
        .await
        .map_err(surface)?;
    println!("{} ({})", response.message, response.data.comparison_date);
    println!("{}", output::comparison_table(&response.data, theme));
    Ok(())
}

async fn handle_summary(
    client: &GatewayClient,
    args: SummaryArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = SummaryQuery {
        market: Some(args.market),
        date: args.date,
    };
    let response = client
        .analysis()
        .fetch_analysis_summary(&query)
        .await
        .map_err(surface)?;
    println!("{}", response.message);
    println!("{}", output::summary_table(&response.data, theme));
    Ok(())
}

async fn handle_trend(client: &GatewayClient, args: TrendArgs, theme: Theme) -> anyhow::Result<()> {
    let query = TrendQuery {
        market: Some(args.market),
        start_date: args.from,
        end_date: args.to,
        indicator_type: args.indicator,
    };
    let response = client
        .visualization()
        .fetch_timing_score_trend(&query)
        .await
        .map_err(surface)?;
    println!("{} point(s)", response.count);
    println!("{}", output::trend_table(&response.data, theme));
    Ok(())
}

async fn handle_dashboard(
    client: &GatewayClient,
    args: SummaryArgs,
    theme: Theme,
) -> anyhow::Result<()> {
    let query = SummaryQuery {
        market: Some(args.market),
        date: args.date,
    };
    let response = client
        .visualization()
        .fetch_dashboard_summary(&query)
        .await
        .map_err(surface)?;
    output::print_dashboard(&response.data, theme);
    Ok(())
}

/// Probes all three services concurrently and reports each independently.
async fn handle_health(client: &GatewayClient) -> anyhow::Result<()> {
    let health = client.health();
    let results = join_all(vec![
        health.check_data_service().boxed(),
        health.check_analysis_service().boxed(),
        health.check_visualization_service().boxed(),
    ])
    .await;

    let mut unhealthy = 0;
    for (name, result) in ["data", "analysis", "visualization"].iter().zip(results) {
        match result {
            Ok(report) => println!("{name}: {} ({})", report.status, report.service),
            Err(err) => {
                unhealthy += 1;
                println!("{name}: unreachable - {err} (code {})", err.code());
            }
        }
    }

    if unhealthy > 0 {
        anyhow::bail!("{unhealthy} service(s) unhealthy");
    }
    Ok(())
}

fn handle_theme(command: &ThemeCommand, store: &mut ThemeStore) -> anyhow::Result<()> {
    match command {
        ThemeCommand::Show => println!("{}", store.theme()),
        ThemeCommand::Toggle => println!("{}", store.toggle()?),
        ThemeCommand::Set { theme } => {
            store.set(*theme)?;
            println!("{theme}");
        }
    }
    Ok(())
}
