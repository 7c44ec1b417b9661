//! Intake of a flat element list into a typed [`Floor`].

use super::types::{ElementKind, FixedElement, FloorPlan, TableSpec};
use crate::error::ConfigError;
use crate::geometry::Rect;

/// One entry of a floor description as supplied by a configuration loader.
///
/// Fixed elements must carry a position; movable tables only need a size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(alias = "tipo"))]
    pub kind: ElementKind,
    #[cfg_attr(feature = "serde", serde(default, alias = "fixo"))]
    pub fixed: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub x: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub y: Option<f64>,
    pub w: f64,
    pub h: f64,
}

/// Everything the engine needs to know about the room, loaded once.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub plan: FloorPlan,
    pub fixed: Vec<FixedElement>,
    pub tables: Vec<TableSpec>,
}

impl Floor {
    /// Builds a floor from already-typed parts.
    ///
    /// Returns [`ConfigError::InvalidPlan`] if a dimension is not a finite
    /// positive number.
    pub fn new(
        plan: FloorPlan,
        fixed: Vec<FixedElement>,
        tables: Vec<TableSpec>,
    ) -> Result<Self, ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(plan.width) || !valid(plan.height) {
            return Err(ConfigError::InvalidPlan {
                width: plan.width,
                height: plan.height,
            });
        }
        Ok(Self {
            plan,
            fixed,
            tables,
        })
    }

    /// Splits a flat element list into fixed obstacles and movable tables.
    ///
    /// Fixed elements keep their kind; movable elements of kind
    /// [`ElementKind::Table`] become [`TableSpec`]s in list order. Movable
    /// elements of any other kind are ignored.
    pub fn from_elements(plan: FloorPlan, elements: &[Element]) -> Result<Self, ConfigError> {
        let mut fixed = Vec::new();
        let mut tables = Vec::new();

        for elem in elements {
            if elem.fixed {
                let (Some(x), Some(y)) = (elem.x, elem.y) else {
                    return Err(ConfigError::MissingPosition {
                        id: elem.id.clone(),
                    });
                };
                fixed.push(FixedElement::new(
                    elem.id.clone(),
                    elem.kind,
                    Rect::new(x, y, elem.w, elem.h),
                ));
            } else if elem.kind == ElementKind::Table {
                tables.push(TableSpec::new(elem.id.clone(), elem.w, elem.h));
            }
        }

        Self::new(plan, fixed, tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(id: &str, kind: ElementKind, fixed: bool, pos: Option<(f64, f64)>) -> Element {
        Element {
            id: id.into(),
            kind,
            fixed,
            x: pos.map(|p| p.0),
            y: pos.map(|p| p.1),
            w: 4.0,
            h: 2.0,
        }
    }

    #[test]
    fn test_from_elements_splits_fixed_and_tables() {
        let elements = vec![
            elem("wall", ElementKind::Wall, true, Some((0.0, 0.0))),
            elem("t1", ElementKind::Table, false, None),
            elem("plant", ElementKind::Other, false, None),
            elem("t2", ElementKind::Table, false, None),
        ];
        let floor = Floor::from_elements(FloorPlan::new(40.0, 30.0), &elements).unwrap();

        assert_eq!(floor.fixed.len(), 1);
        assert_eq!(floor.fixed[0].kind, ElementKind::Wall);
        let ids: Vec<&str> = floor.tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }

    #[test]
    fn test_fixed_element_without_position() {
        let elements = vec![elem("wc", ElementKind::Bathroom, true, None)];
        let err = Floor::from_elements(FloorPlan::new(40.0, 30.0), &elements).unwrap_err();
        assert_eq!(err, ConfigError::MissingPosition { id: "wc".into() });
    }

    #[test]
    fn test_invalid_plan_dimensions() {
        assert!(Floor::new(FloorPlan::new(0.0, 30.0), vec![], vec![]).is_err());
        assert!(Floor::new(FloorPlan::new(40.0, f64::NAN), vec![], vec![]).is_err());
        assert!(Floor::new(FloorPlan::new(40.0, 30.0), vec![], vec![]).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_portuguese_tags() {
        let json = r#"[
            {"id": "p1", "tipo": "parede", "fixo": true, "x": 0, "y": 0, "w": 40, "h": 1},
            {"id": "b1", "tipo": "banheiro", "fixo": true, "x": 30, "y": 20, "w": 10, "h": 10},
            {"id": "m1", "tipo": "mesa", "w": 20, "h": 8},
            {"id": "x1", "tipo": "vaso", "fixo": true, "x": 5, "y": 5, "w": 1, "h": 1}
        ]"#;
        let elements: Vec<Element> = serde_json::from_str(json).unwrap();
        let floor = Floor::from_elements(FloorPlan::new(40.0, 30.0), &elements).unwrap();

        assert_eq!(floor.fixed.len(), 3);
        assert_eq!(floor.fixed[1].kind, ElementKind::Bathroom);
        assert_eq!(floor.fixed[2].kind, ElementKind::Other);
        assert_eq!(floor.tables, vec![TableSpec::new("m1", 20.0, 8.0)]);
    }
}
