use cronaca_core::CronacaConnector;
use cronaca_yfinance::YfConnector;

#[test]
fn advertises_prices_only() {
    let yf = YfConnector::try_new_default().expect("client builds");
    assert_eq!(yf.name(), "cronaca-yfinance");
    assert_eq!(yf.key(), YfConnector::KEY);
    assert!(yf.as_price_provider().is_some());
    assert!(yf.as_news_provider().is_none());
}
