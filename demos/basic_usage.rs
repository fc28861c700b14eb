// ============================================================================
// Basic Usage Example
// ============================================================================

use token_fractions::prelude::*;

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Token Fractions Example ===\n");

    let ether: AnyCurrency = NativeCurrency::ether(1).into();
    let usdc = Token::new(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)?
        .with_symbol("USDC")
        .with_name("USD Coin");

    // User types an amount of native ether
    let input = CurrencyAmount::parse_amount(ether, "2.75", ".", ",")?;
    println!("Input: {}", input.format_units()?);

    // Pools trade the wrapped token
    let input = input.wrapped(1)?;
    println!("Wrapped: {} (raw {})", input.format_units()?, input.raw());

    // 1 WETH = 2,513.42 USDC
    let mid_price = Price::new(
        input.currency().clone(),
        usdc.clone(),
        1_000_000_000_000_000_000u64,
        2_513_420_000u64,
    );
    let display = NumberFormat::display();
    println!(
        "\nMid price: {} USDC per WETH",
        mid_price.to_fixed(2, Some(&display), None)?
    );
    println!(
        "Inverted: {} WETH per USDC",
        mid_price.invert().to_significant(6, None, None)?
    );

    // Quote, then apply a 0.3% fee
    let quoted = mid_price.quote(&input)?;
    let fee = Percent::from_bps(30);
    let output = quoted.reduce_by(&fee)?;
    println!("\nQuoted: {}", quoted.format_units()?);
    println!("After {} fee: {}", fee, output.format_units()?);

    let impact = compute_price_impact(&mid_price, &input, &output)?;
    println!("Price impact: {}", impact);

    let execution = Price::from_amounts(&input, &output);
    println!(
        "Execution price: {} USDC per WETH",
        execution.to_fixed(2, Some(&display), Some(Rounding::RoundDown))?
    );

    // Rounding modes
    println!("\n=== Rounding ===");
    let third = Fraction::new(2, 3);
    for rounding in [Rounding::RoundDown, Rounding::RoundHalfUp, Rounding::RoundUp] {
        println!("  2/3 {:?}: {}", rounding, third.to_fixed(4, None, Some(rounding))?);
    }

    // Rejected work is logged at debug level
    println!("\n=== Errors ===");
    let dust = CurrencyAmount::from_raw_amount(usdc, 1)?;
    if let Err(e) = input.add(&dust) {
        println!("  {}", e);
    }
    if let Err(e) = input.to_fixed(19, None, None) {
        println!("  {}", e);
    }
    if let Err(e) = sqrt(&parse_integer("-4")?) {
        println!("  {}", e);
    }

    Ok(())
}
