//! Basic OptionalValue usage example

use optval::{OptionalValue, NONE};

#[derive(Debug)]
struct Connection {
    port: u16,
}

impl Connection {
    fn open(port: u16) -> Self {
        println!("  opening connection on port {port}");
        Connection { port }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        println!("  closing connection on port {}", self.port);
    }
}

fn main() {
    println!("OptionalValue Basic Usage Example");
    println!("=================================");

    // A type without `Default` can still start out empty
    let mut conn: OptionalValue<Connection> = OptionalValue::new();
    println!("Initially empty: {}", conn == NONE);

    // Emplace constructs in place, dropping whatever was there first
    println!("\nEmplace:");
    conn.emplace_with(|| Connection::open(8080));
    println!("  port = {}", conn.port);
    conn.emplace_with(|| Connection::open(9090));
    println!("  port = {}", conn.value().port);

    // Moving out leaves the source empty
    println!("\nMove:");
    let moved = OptionalValue::take_from(&mut conn);
    println!("  source empty: {}, destination: {:?}", conn.is_none(), moved);

    // Fallbacks without branching
    println!("\nFallbacks:");
    let retries: OptionalValue<u32> = OptionalValue::new();
    println!("  retries = {}", retries.value_or(3));

    let timeout = OptionalValue::from_value(30u32);
    println!("  timeout = {}", timeout.into_value_or(10));

    // Comparing two containers is not allowed; compare the values explicitly
    println!("\nExplicit comparison:");
    let a = OptionalValue::from_value(1);
    let b = OptionalValue::from_value(1);
    println!("  equal values: {}", a.get() == b.get());

    println!("\nReset:");
    drop(moved);
    conn.reset();
    println!("  reset on an empty container is a no-op: {}", conn == NONE);
}
