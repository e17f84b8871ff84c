/// Three axis sample in physical units.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }
}

/// Everything one burst read of the output registers yields.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorData
{
    /// Acceleration in g.
    pub accel: Vector,
    /// Angular rate in deg/s.
    pub gyro: Vector,
    /// Die temperature in degrees celsius.
    pub temp: f32,
}
