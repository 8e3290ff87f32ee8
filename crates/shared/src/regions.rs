//! Region Index: static lookups over the region/department table, plus the
//! document-dependent region -> shape lookup.

use std::collections::HashMap;

use crate::error::{MapError, Result};
use crate::models::{ColorScheme, DepartmentId, RegionColor, RegionTable};
use crate::surface::RenderSurface;

#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub color: RegionColor,
    pub departments: Vec<DepartmentId>,
}

#[derive(Debug, Clone)]
struct DepartmentEntry {
    name: String,
    region: usize,
}

/// Lookups built once from a [`RegionTable`]. Immutable for the session.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    regions: Vec<Region>,
    by_name: HashMap<String, usize>,
    departments: HashMap<DepartmentId, DepartmentEntry>,
}

impl RegionIndex {
    /// Build the index, rejecting a department listed under two regions.
    pub fn new(table: RegionTable) -> Result<Self> {
        let mut regions = Vec::with_capacity(table.regions.len());
        let mut by_name = HashMap::with_capacity(table.regions.len());
        let mut departments: HashMap<DepartmentId, DepartmentEntry> = HashMap::new();

        for (region_idx, (name, entry)) in table.regions.into_iter().enumerate() {
            let mut ids = Vec::with_capacity(entry.departments.len());
            for (id, dept_name) in entry.departments {
                if let Some(existing) = departments.get(&id) {
                    // The current region is pushed after this loop, so a repeat inside it
                    // reports the region as both first and second.
                    let first = regions
                        .get(existing.region)
                        .map_or_else(|| name.clone(), |r: &Region| r.name.clone());
                    return Err(MapError::DuplicateDepartment {
                        id,
                        first,
                        second: name,
                    });
                }
                departments.insert(
                    id,
                    DepartmentEntry {
                        name: dept_name,
                        region: region_idx,
                    },
                );
                ids.push(id);
            }
            by_name.insert(name.clone(), region_idx);
            regions.push(Region {
                name,
                color: entry.color,
                departments: ids,
            });
        }

        Ok(Self {
            regions,
            by_name,
            departments,
        })
    }

    pub fn department_name(&self, id: DepartmentId) -> Option<&str> {
        match self.departments.get(&id) {
            Some(d) => Some(&d.name),
            None => {
                tracing::warn!(department = id, "no department found for id");
                None
            }
        }
    }

    /// Name of the region owning department `id`.
    pub fn region_of(&self, id: DepartmentId) -> Option<&str> {
        match self.departments.get(&id) {
            Some(d) => Some(&self.regions[d.region].name),
            None => {
                tracing::warn!(department = id, "no region found for department");
                None
            }
        }
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.by_name.get(name).map(|&i| &self.regions[i])
    }

    pub fn region_color(&self, name: &str, scheme: ColorScheme) -> Option<&str> {
        match self.region(name) {
            Some(r) => Some(r.color.for_scheme(scheme)),
            None => {
                tracing::warn!(region = name, "no color found for region");
                None
            }
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// All department ids, grouped by region in table order.
    pub fn departments(&self) -> impl Iterator<Item = DepartmentId> + '_ {
        self.regions.iter().flat_map(|r| r.departments.iter().copied())
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Resolve every department to its rendered shape. Departments without a
    /// shape are skipped, leaving their region partially colorable.
    pub fn resolve_paths<S: RenderSurface>(&self, surface: &S) -> RegionPaths<S::Handle> {
        let mut by_region = HashMap::with_capacity(self.regions.len());
        let mut by_department = HashMap::with_capacity(self.departments.len());
        for region in &self.regions {
            let mut shapes = Vec::with_capacity(region.departments.len());
            for &id in &region.departments {
                match surface.department_shape(id) {
                    Some(shape) => {
                        by_department.insert(id, shape.clone());
                        shapes.push((id, shape));
                    }
                    None => tracing::debug!(department = id, region = %region.name, "shape not found, skipping"),
                }
            }
            if shapes.len() < region.departments.len() {
                tracing::warn!(
                    region = %region.name,
                    found = shapes.len(),
                    expected = region.departments.len(),
                    "region will be partially colored"
                );
            }
            by_region.insert(region.name.clone(), shapes);
        }
        RegionPaths {
            by_region,
            by_department,
        }
    }
}

/// Region name -> shapes present in the rendered document.
#[derive(Debug, Clone)]
pub struct RegionPaths<H> {
    by_region: HashMap<String, Vec<(DepartmentId, H)>>,
    by_department: HashMap<DepartmentId, H>,
}

impl<H> RegionPaths<H> {
    pub fn region(&self, name: &str) -> &[(DepartmentId, H)] {
        self.by_region.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn department(&self, id: DepartmentId) -> Option<&H> {
        self.by_department.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_department.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_department.is_empty()
    }
}
