struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

fn main() {
    let origin = Point { x: 3.0, y: 4.0 };
    println!("{}", origin.magnitude());
}
