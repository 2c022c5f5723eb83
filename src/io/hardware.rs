/// Live hardware readings.
///
/// Every accessor is queried synchronously, once per reference in a template,
/// so a compiled page is a point-in-time snapshot.
pub trait Hardware {
    fn led(&self) -> u32;
    fn button(&self) -> u32;
    fn rotate(&self) -> u32;
    fn temperature(&self) -> u32;
    fn humidity(&self) -> u32;
    fn analog(&self) -> u32;
}

/// The `IO_*` identifiers a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpioPin {
    Led,
    Button,
    Rotate,
    Temp,
    Humidity,
    Analog,
}

impl GpioPin {
    pub const ALL: [GpioPin; 6] = [
        GpioPin::Led,
        GpioPin::Button,
        GpioPin::Rotate,
        GpioPin::Temp,
        GpioPin::Humidity,
        GpioPin::Analog,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            GpioPin::Led => "IO_LED",
            GpioPin::Button => "IO_BUTTON",
            GpioPin::Rotate => "IO_ROTATE",
            GpioPin::Temp => "IO_TEMP",
            GpioPin::Humidity => "IO_HUMIDITY",
            GpioPin::Analog => "IO_ANALOG",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|pin| pin.identifier() == identifier)
    }

    pub fn read(self, hardware: &dyn Hardware) -> u32 {
        match self {
            GpioPin::Led => hardware.led(),
            GpioPin::Button => hardware.button(),
            GpioPin::Rotate => hardware.rotate(),
            GpioPin::Temp => hardware.temperature(),
            GpioPin::Humidity => hardware.humidity(),
            GpioPin::Analog => hardware.analog(),
        }
    }
}

/// A fixed set of readings. All zero by default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Readings {
    pub led: u32,
    pub button: u32,
    pub rotate: u32,
    pub temperature: u32,
    pub humidity: u32,
    pub analog: u32,
}

impl Readings {
    pub fn set(&mut self, pin: GpioPin, value: u32) {
        let slot = match pin {
            GpioPin::Led => &mut self.led,
            GpioPin::Button => &mut self.button,
            GpioPin::Rotate => &mut self.rotate,
            GpioPin::Temp => &mut self.temperature,
            GpioPin::Humidity => &mut self.humidity,
            GpioPin::Analog => &mut self.analog,
        };

        *slot = value;
    }

    pub fn with(mut self, pin: GpioPin, value: u32) -> Self {
        self.set(pin, value);
        self
    }
}

impl Hardware for Readings {
    fn led(&self) -> u32 {
        self.led
    }

    fn button(&self) -> u32 {
        self.button
    }

    fn rotate(&self) -> u32 {
        self.rotate
    }

    fn temperature(&self) -> u32 {
        self.temperature
    }

    fn humidity(&self) -> u32 {
        self.humidity
    }

    fn analog(&self) -> u32 {
        self.analog
    }
}
