pub mod param;

pub use param::{
    distance_at_param, distance_at_point, param_at_distance, param_at_point, point_at_distance,
    point_at_param,
};
