// CodeOwner: @rust_owner

/// Greets someone.
fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

fn main() {
    println!("{}", greet("world")); /* inline */
}
