//! Terminal rendering of fetched records and analysis results.

use crate::theme::Theme;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use core_types::{
    AnalysisSummary, DashboardSummary, IndustryRecord, MacroRecord, MarketComparison,
    PositionSizing, SentimentRecord, TimingIndicators, TrendPoint,
};
use std::fmt::Display;

fn base_table(theme: Theme, headers: &[&str]) -> Table {
    let mut table = Table::new();
    match theme {
        Theme::Light => table.load_preset(UTF8_FULL),
        Theme::Dark => table.load_preset(UTF8_FULL_CONDENSED),
    };
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_color = match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    };
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(header_color))
            .collect::<Vec<_>>(),
    );
    table
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".to_string())
}

pub fn macro_table(records: &[MacroRecord], theme: Theme) -> Table {
    let mut table = base_table(
        theme,
        &["Date", "Market", "PMI", "CPI", "PPI", "M2", "Interest rate"],
    );
    for r in records {
        table.add_row(vec![
            r.date.to_string(),
            r.market.to_string(),
            opt(&r.pmi),
            opt(&r.cpi),
            opt(&r.ppi),
            opt(&r.m2),
            opt(&r.interest_rate),
        ]);
    }
    table
}

pub fn sentiment_table(records: &[SentimentRecord], theme: Theme) -> Table {
    let mut table = base_table(
        theme,
        &["Date", "Market", "Volatility", "Sentiment", "RSI", "MACD", "Bollinger"],
    );
    for r in records {
        let technical = r.technical_indicators.clone().unwrap_or_default();
        table.add_row(vec![
            r.date.to_string(),
            r.market.to_string(),
            opt(&r.volatility),
            opt(&r.investor_sentiment),
            opt(&technical.rsi),
            opt(&technical.macd),
            opt(&technical.bollinger_bands),
        ]);
    }
    table
}

pub fn industry_table(records: &[IndustryRecord], theme: Theme) -> Table {
    let mut table = base_table(
        theme,
        &["Date", "Market", "Industry", "Free cash flow", "Industry sentiment"],
    );
    for r in records {
        table.add_row(vec![
            r.date.to_string(),
            r.market.to_string(),
            r.industry.clone(),
            opt(&r.free_cash_flow),
            opt(&r.industry_sentiment),
        ]);
    }
    table
}

pub fn indicators_table(records: &[TimingIndicators], theme: Theme) -> Table {
    let mut table = base_table(
        theme,
        &["Date", "Market", "Overall", "Macro", "Industry", "Sentiment", "Strength"],
    );
    for r in records {
        table.add_row(vec![
            r.date.to_string(),
            r.market.to_string(),
            r.overall_score.to_string(),
            r.macro_score.to_string(),
            r.industry_score.to_string(),
            r.sentiment_score.to_string(),
            r.strength_level.to_string(),
        ]);
    }
    table
}

pub fn trend_table(points: &[TrendPoint], theme: Theme) -> Table {
    let mut table = base_table(theme, &["Date", "Score", "Strength"]);
    for p in points {
        table.add_row(vec![
            p.date.to_string(),
            p.score.to_string(),
            p.strength_level.to_string(),
        ]);
    }
    table
}

pub fn position_table(position: &PositionSizing, theme: Theme) -> Table {
    let mut table = base_table(theme, &["Field", "Value"]);
    table.add_row(vec!["Market".to_string(), position.market.to_string()]);
    table.add_row(vec!["Date".to_string(), position.date.to_string()]);
    table.add_row(vec![
        "Timing score".to_string(),
        position.timing_score.to_string(),
    ]);
    table.add_row(vec![
        "Strength".to_string(),
        position.strength_level.to_string(),
    ]);
    table.add_row(vec![
        "Position %".to_string(),
        position.position_percentage.to_string(),
    ]);
    table.add_row(vec![
        "Position amount".to_string(),
        position.position_amount.to_string(),
    ]);
    table.add_row(vec![
        "Available capital".to_string(),
        position.available_capital.to_string(),
    ]);
    table.add_row(vec![
        "Risk per trade %".to_string(),
        position.risk_per_trade_percentage.to_string(),
    ]);
    table.add_row(vec![
        "Risk amount".to_string(),
        position.risk_amount.to_string(),
    ]);
    table
}

pub fn comparison_table(comparison: &MarketComparison, theme: Theme) -> Table {
    let mut table = base_table(
        theme,
        &["Market", "Overall", "Macro", "Industry", "Sentiment", "Strength", "Best"],
    );
    for (market, scores) in &comparison.markets {
        let best = if comparison.best_market == Some(*market) {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            market.to_string(),
            scores.overall_score.to_string(),
            scores.macro_score.to_string(),
            scores.industry_score.to_string(),
            scores.sentiment_score.to_string(),
            scores.strength_level.to_string(),
            best.to_string(),
        ]);
    }
    table
}

pub fn summary_table(summary: &AnalysisSummary, theme: Theme) -> Table {
    let mut table = base_table(theme, &["Field", "Value"]);
    table.add_row(vec!["Market".to_string(), summary.market.to_string()]);
    table.add_row(vec![
        "Analysis date".to_string(),
        summary.analysis_date.to_string(),
    ]);
    table.add_row(vec![
        "Overall score".to_string(),
        summary.overall_score.to_string(),
    ]);
    table.add_row(vec![
        "Strength".to_string(),
        summary.strength_level.to_string(),
    ]);
    table.add_row(vec![
        "Macro score".to_string(),
        summary.component_scores.macro_score.to_string(),
    ]);
    table.add_row(vec![
        "Industry score".to_string(),
        summary.component_scores.industry.to_string(),
    ]);
    table.add_row(vec![
        "Sentiment score".to_string(),
        summary.component_scores.sentiment.to_string(),
    ]);
    table.add_row(vec!["PMI".to_string(), opt(&summary.key_indicators.pmi)]);
    table.add_row(vec!["CPI".to_string(), opt(&summary.key_indicators.cpi)]);
    table.add_row(vec![
        "Volatility".to_string(),
        opt(&summary.key_indicators.volatility),
    ]);
    table.add_row(vec![
        "Recommendation".to_string(),
        summary.recommendation.clone(),
    ]);
    table
}

pub fn print_dashboard(dashboard: &DashboardSummary, theme: Theme) {
    println!("Analysis");
    println!("{}", summary_table(&dashboard.analysis, theme));
    println!("\nPosition suggestion");
    println!("{}", position_table(&dashboard.position, theme));
    println!(
        "\nMarket config: enabled={}, indices=[{}], update frequency={}",
        dashboard.market_config.enabled,
        dashboard.market_config.indices.join(", "),
        dashboard.market_config.update_frequency,
    );
}
