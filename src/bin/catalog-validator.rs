//! # Attribute Catalog Validator
//!
//! A command-line utility for validating attribute catalog files and checking
//! attribute values against the enumerations that restrict them.
//!
//! ## Usage
//!
//! ### Validate the embedded catalog
//!
//! ```bash
//! cargo run --bin catalog-validator
//! ```
//!
//! ### Validate a catalog file
//!
//! ```bash
//! cargo run --bin catalog-validator catalog.json
//! ```
//!
//! ### Check a value
//!
//! ```bash
//! cargo run --bin catalog-validator -- --check zimbraMailMode https
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Validating catalog file: catalog.json
//! ✓ Catalog is valid!
//!
//! Catalog Summary:
//!   Attributes: 940
//!   With schema ids: 883
//!   Enum-restricted: 45
//!   Deprecated: 44
//! ```
//!
//! ```text
//! ❌ zimbraMailMode: Invalid request: invalid value: HTTPS, valid values: [https, both, http, mixed, redirect]
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Catalog is valid, or the checked value is accepted
//! - `1`: Catalog is invalid, the value is rejected, or usage error

use provisioning_attrs::AttributeRegistry;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.as_slice() {
        [_] => validate_embedded(),
        [_, flag, attr, value] if flag == "--check" => check_value(attr, value),
        [_, path] if !path.starts_with("--") => validate_file(Path::new(path)),
        _ => {
            let program = args.first().map_or("catalog-validator", String::as_str);
            eprintln!("Usage: {} [catalog.json]", program);
            eprintln!("       {} --check <attribute> <value>", program);
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} catalog.json", program);
            eprintln!("  {} --check zimbraMailMode https", program);
            process::exit(1);
        }
    }
}

fn validate_embedded() {
    println!("Validating embedded catalog");

    match AttributeRegistry::with_embedded_catalog() {
        Ok(registry) => {
            println!("✓ Catalog is valid!");
            print_catalog_summary(&registry);
        }
        Err(e) => {
            eprintln!("❌ Catalog validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn validate_file(path: &Path) {
    if !path.is_file() {
        eprintln!("Error: '{}' is not a valid file", path.display());
        process::exit(1);
    }

    println!("Validating catalog file: {}", path.display());

    match AttributeRegistry::from_catalog_file(path) {
        Ok(registry) => {
            println!("✓ Catalog is valid!");
            print_catalog_summary(&registry);
        }
        Err(e) => {
            eprintln!("❌ Catalog validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn check_value(attr: &str, value: &str) {
    let registry = AttributeRegistry::global();

    match registry.validate_value(attr, value) {
        Ok(()) => match registry.enum_for(attr) {
            Some(definition) => println!("✓ {}: '{}' is a valid {}", attr, value, definition.type_name),
            None => println!("✓ {}: unrestricted attribute, value accepted", attr),
        },
        Err(e) => {
            eprintln!("❌ {}: {}", attr, e);
            process::exit(1);
        }
    }
}

fn print_catalog_summary(registry: &AttributeRegistry) {
    let with_ids = registry.attributes().iter().filter(|a| a.id.is_some()).count();

    println!();
    println!("Catalog Summary:");
    println!("  Attributes: {}", registry.len());
    println!("  With schema ids: {}", with_ids);
    println!("  Enum-restricted: {}", registry.enum_attributes().count());
    println!("  Deprecated: {}", registry.deprecated().count());

    let deprecated: Vec<&str> = registry.deprecated().map(|a| a.name.as_str()).collect();
    if !deprecated.is_empty() {
        println!("  Deprecated attribute names: {}", deprecated.join(", "));
    }
}
