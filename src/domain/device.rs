use super::ports::Command;
use crate::error::Result;
use std::io::Write;

pub struct Light {
    location: String,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [Light] {}: ON", self.location)?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [Light] {}: OFF", self.location)?;
        Ok(())
    }
}

pub struct Door {
    location: String,
}

impl Door {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn open(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [Door] {}: OPEN", self.location)?;
        Ok(())
    }

    pub fn close(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [Door] {}: CLOSE", self.location)?;
        Ok(())
    }
}

pub struct Thermostat {
    temp: i32,
}

impl Thermostat {
    pub fn new() -> Self {
        Self { temp: 20 }
    }

    pub fn set(&mut self, degrees: i32, out: &mut dyn Write) -> Result<()> {
        self.temp = degrees;
        writeln!(out, "   [Thermostat] Temperature set to: {}°C", self.temp)?;
        Ok(())
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Television {
    location: String,
}

impl Television {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [TV] {}: Power ON", self.location)?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "   [TV] {}: Power OFF", self.location)?;
        Ok(())
    }
}

/// Turns a light on; undo turns it back off.
pub struct LightOn {
    light: Light,
}

impl LightOn {
    pub fn new(light: Light) -> Self {
        Self { light }
    }
}

impl Command for LightOn {
    fn execute(&mut self, out: &mut dyn Write) -> Result<()> {
        self.light.on(out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> Result<()> {
        self.light.off(out)
    }
}

/// Opens a door; undo closes it.
pub struct DoorOpen {
    door: Door,
}

impl DoorOpen {
    pub fn new(door: Door) -> Self {
        Self { door }
    }
}

impl Command for DoorOpen {
    fn execute(&mut self, out: &mut dyn Write) -> Result<()> {
        self.door.open(out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> Result<()> {
        self.door.close(out)
    }
}

/// Raises the thermostat to 22 degrees; undo restores the 20 degree default.
pub struct TempIncrease {
    thermostat: Thermostat,
}

impl TempIncrease {
    pub fn new(thermostat: Thermostat) -> Self {
        Self { thermostat }
    }
}

impl Command for TempIncrease {
    fn execute(&mut self, out: &mut dyn Write) -> Result<()> {
        self.thermostat.set(22, out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> Result<()> {
        self.thermostat.set(20, out)
    }
}

/// Turns a television on; undo powers it back off.
pub struct TvOn {
    tv: Television,
}

impl TvOn {
    pub fn new(tv: Television) -> Self {
        Self { tv }
    }
}

impl Command for TvOn {
    fn execute(&mut self, out: &mut dyn Write) -> Result<()> {
        self.tv.on(out)
    }

    fn undo(&mut self, out: &mut dyn Write) -> Result<()> {
        self.tv.off(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: &mut dyn Command) -> (String, String) {
        let mut executed = Vec::new();
        command.execute(&mut executed).unwrap();
        let mut undone = Vec::new();
        command.undo(&mut undone).unwrap();
        (
            String::from_utf8(executed).unwrap(),
            String::from_utf8(undone).unwrap(),
        )
    }

    #[test]
    fn test_light_command_round_trip() {
        let (executed, undone) = run(&mut LightOn::new(Light::new("Kitchen")));
        assert!(executed.contains("[Light] Kitchen: ON"));
        assert!(undone.contains("[Light] Kitchen: OFF"));
    }

    #[test]
    fn test_door_command_round_trip() {
        let (executed, undone) = run(&mut DoorOpen::new(Door::new("Garage")));
        assert!(executed.contains("[Door] Garage: OPEN"));
        assert!(undone.contains("[Door] Garage: CLOSE"));
    }

    #[test]
    fn test_temp_command_round_trip() {
        let (executed, undone) = run(&mut TempIncrease::new(Thermostat::new()));
        assert!(executed.contains("Temperature set to: 22"));
        assert!(undone.contains("Temperature set to: 20"));
    }

    #[test]
    fn test_tv_command_round_trip() {
        let (executed, undone) = run(&mut TvOn::new(Television::new("Living Room")));
        assert!(executed.contains("[TV] Living Room: Power ON"));
        assert!(undone.contains("[TV] Living Room: Power OFF"));
    }
}
