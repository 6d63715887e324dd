use tt_rs::table::{DynamicTruthTable, StaticTruthTable};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    // f = x0 & x1
    let and = StaticTruthTable::<2, 1>::from_blocks([0b1000])?;
    println!("and = {:?}", and);
    println!("swap_adjacent(and, 0) = {:?}", and.swap_adjacent(0));
    println!("flip(and, 0) = {:?}", and.flip(0));
    println!("cofactor0(and, 1) = {:?}", and.cofactor0(1));
    println!("cofactor1(and, 1) = {:?}", and.cofactor1(1));

    // g = x0 & x2 over 3 variables
    let mut g = DynamicTruthTable::new(3);
    g.set_bit(0b101);
    g.set_bit(0b111);
    println!("g = {:?}", g);

    let support = g.min_base_inplace();
    println!("min_base(g) = {:?}, support = {:?}", g, support);
    g.expand_inplace(&support);
    println!("expand(g) = {:?}", g);

    let wide = and.extend_to(8);
    println!("extend_to(and, 8) = {:?}", wide);
    println!("shift_left(extend_to(and, 8), 100) = {:?}", wide.shift_left(100));

    Ok(())
}
