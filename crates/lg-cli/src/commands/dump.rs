use crate::Source;

pub fn run(source: &Source) -> Result<(), String> {
    let world = super::load_world(source)?;
    print!("{world}");
    Ok(())
}
