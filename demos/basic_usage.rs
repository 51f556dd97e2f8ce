// ============================================================================
// Basic Usage Example
// ============================================================================

use fachwert::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fachwert Example ===\n");

    // Parse amounts in German and English notation
    println!("Parsing amounts...");
    let net = Money::parse("1.234,56 EUR").unwrap();
    let fee = Money::parse("€ 12,50").unwrap();
    let foreign = Money::parse("USD 1,000.00").unwrap();
    println!("  net:     {}", net);
    println!("  fee:     {}", fee);
    println!("  foreign: {}", foreign);

    // Exact arithmetic
    println!("\n=== Arithmetic ===");
    let subtotal = net.add(&fee).unwrap();
    let vat = subtotal.with(&percent(19)).unwrap();
    let gross = subtotal.add(&vat).unwrap();
    println!("  subtotal: {}", subtotal);
    println!("  vat 19%:  {}", vat);
    println!("  gross:    {}", gross.round_to_currency());

    match gross.divide(3) {
        Ok(share) => println!("  third:    {}", share),
        Err(err) => println!("  third:    {} (rounding instead)", err),
    }
    let share = gross.divide_rounded(3, 2, RoundingMode::HalfUp).unwrap();
    println!("  third:    {}", share);

    let [quotient, remainder] = gross.divide_and_remainder(100).unwrap();
    println!("  {} x 100 + {}", quotient, remainder);

    // Currencies never mix silently
    if let Err(err) = net.add(&foreign) {
        println!("  mixing currencies: {}", err);
    }

    // Formatting
    println!("\n=== Formatting ===");
    for locale in [Locale::germany(), Locale::us(), Locale::parse("de_CH").unwrap()] {
        println!("  {:<6} {}", locale.to_string(), gross.format(&locale));
    }

    // Factory with a bounded context
    println!("\n=== Factory ===");
    let mut factory = MoneyFactory::new();
    factory
        .set_currency(Currency::EUR)
        .set_context(MonetaryContext::maximal().with_max_scale(2));
    for number in [Decimal::new(1999, 2), Decimal::new(19_999, 3)] {
        match factory.set_number(number).create() {
            Ok(amount) => println!("  created {}", amount),
            Err(err) => println!("  rejected {}: {}", number, err),
        }
    }

    // Check digits and identifiers
    println!("\n=== Check Digits ===");
    let luhn = create_from_config(&CheckDigitType::luhn()).unwrap();
    println!("  Luhn check digit of 7992739871: {}", luhn.compute_check_digit("7992739871").unwrap());

    for text in ["DE68 2105 0170 0012 3456 78", "DE68 2105 0180 0012 3456 78"] {
        match Iban::new(text) {
            Ok(iban) => println!("  {} valid, bank code {:?}", iban.formatted(), iban.bank_code()),
            Err(err) => println!("  {}", err),
        }
    }

    let tax_id = TaxId::new("86095742719").unwrap();
    println!("  tax id {} packed as {:02X?}", tax_id, tax_id.packed().as_bytes());
}
