use crate::Source;

pub fn run(source: &Source, year: Option<i32>) -> Result<(), String> {
    let world = super::load_world(source)?;

    let mut shown = 0usize;
    for event in world
        .events()
        .iter()
        .filter(|e| year.is_none_or(|y| e.year == y))
    {
        println!("  {:>6}  {}", event.year, world.narrate(event));
        shown += 1;
    }

    if shown == 0 {
        println!("  No events found.");
    } else {
        println!();
        println!("  {shown} events");
    }

    Ok(())
}
