//! Penetration depth computation using the Expanding Polytope Algorithm.

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{self, CSOPoint, MinkowskiDiff, VoronoiSimplex};
use crate::query::PointQueryWithLocation;
use crate::shape::{SupportMap, Tetrahedron, Triangle, TrianglePointLocation};
use crate::utils;
use arrayvec::ArrayVec;
use na::Unit;
use num::Bounded;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The maximum number of vertices of the expanded polytope.
///
/// Reaching this bound ends the expansion with [`EpaResult::OutOfVertices`].
pub const MAX_VERTICES: usize = 128;

/// The maximum number of faces of the expanded polytope.
///
/// Reaching this bound ends the expansion with [`EpaResult::OutOfFaces`].
pub const MAX_FACES: usize = 256;

#[derive(Copy, Clone, PartialEq)]
struct FaceId {
    id: usize,
    neg_dist: Real,
}

impl FaceId {
    fn new(id: usize, neg_dist: Real) -> Option<Self> {
        if neg_dist > gjk::eps_tol() {
            // The origin is on the wrong side of this face: numerical drift.
            None
        } else {
            Some(FaceId { id, neg_dist })
        }
    }
}

impl Eq for FaceId {}

impl PartialOrd for FaceId {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FaceId {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.neg_dist < other.neg_dist {
            Ordering::Less
        } else if self.neg_dist > other.neg_dist {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[derive(Clone, Debug)]
struct Face {
    pts: [usize; 3],
    adj: [usize; 3],
    normal: Unit<Vector<Real>>,
    bcoords: [Real; 3],
    deleted: bool,
}

impl Face {
    pub fn new_with_proj(
        vertices: &[CSOPoint],
        bcoords: [Real; 3],
        pts: [usize; 3],
        adj: [usize; 3],
    ) -> Self {
        let normal = utils::ccw_face_normal([
            &vertices[pts[0]].point,
            &vertices[pts[1]].point,
            &vertices[pts[2]].point,
        ])
        // Degenerate faces get a zero normal; `can_be_seen_by` reports them as seen so
        // they are dropped by the silhouette walk.
        .unwrap_or(Unit::new_unchecked(na::zero()));

        Face {
            pts,
            bcoords,
            adj,
            normal,
            deleted: false,
        }
    }

    /// Creates a new face and determines whether the origin projects inside of it.
    pub fn new(vertices: &[CSOPoint], pts: [usize; 3], adj: [usize; 3]) -> (Self, bool) {
        let tri = Triangle::new(
            vertices[pts[0]].point,
            vertices[pts[1]].point,
            vertices[pts[2]].point,
        );
        let (proj, loc) = tri.project_local_point_and_get_location(&Point::<Real>::origin(), true);

        match loc {
            TrianglePointLocation::OnVertex(_) | TrianglePointLocation::OnEdge(_, _) => {
                let eps_tol = crate::math::DEFAULT_EPSILON * 100.0;
                (
                    // `barycentric_coordinates` is guaranteed to succeed for the OnVertex
                    // and OnEdge locations.
                    Self::new_with_proj(vertices, loc.barycentric_coordinates().unwrap(), pts, adj),
                    proj.is_inside_eps(&Point::<Real>::origin(), eps_tol),
                )
            }
            TrianglePointLocation::OnFace(_, bcoords) => {
                (Self::new_with_proj(vertices, bcoords, pts, adj), true)
            }
            _ => (Self::new_with_proj(vertices, [0.0; 3], pts, adj), false),
        }
    }

    pub fn distance(&self, vertices: &[CSOPoint]) -> Real {
        self.normal.dot(&vertices[self.pts[0]].point.coords)
    }

    pub fn closest_points(&self, vertices: &[CSOPoint]) -> (Point<Real>, Point<Real>) {
        (
            vertices[self.pts[0]].orig1 * self.bcoords[0]
                + vertices[self.pts[1]].orig1.coords * self.bcoords[1]
                + vertices[self.pts[2]].orig1.coords * self.bcoords[2],
            vertices[self.pts[0]].orig2 * self.bcoords[0]
                + vertices[self.pts[1]].orig2.coords * self.bcoords[1]
                + vertices[self.pts[2]].orig2.coords * self.bcoords[2],
        )
    }

    pub fn next_ccw_pt_id(&self, id: usize) -> usize {
        if self.pts[0] == id {
            1
        } else if self.pts[1] == id {
            2
        } else {
            if self.pts[2] != id {
                log::debug!(
                    "Hit unexpected state during polytope expansion: found index {}, expected: {}.",
                    self.pts[2],
                    id
                );
            }

            0
        }
    }

    pub fn can_be_seen_by(&self, vertices: &[CSOPoint], point: usize, opp_pt_id: usize) -> bool {
        let p0 = &vertices[self.pts[opp_pt_id]].point;
        let p1 = &vertices[self.pts[(opp_pt_id + 1) % 3]].point;
        let p2 = &vertices[self.pts[(opp_pt_id + 2) % 3]].point;
        let pt = &vertices[point].point;

        // A zero dot product must count as seen: degenerate faces have a zero normal and
        // must be skipped by the silhouette computation.
        (*pt - *p0).dot(&self.normal) >= -gjk::eps_tol()
            || Triangle::new(*p1, *p2, *pt).is_affinely_dependent()
    }
}

struct SilhouetteEdge {
    face_id: usize,
    opp_pt_id: usize,
}

impl SilhouetteEdge {
    pub fn new(face_id: usize, opp_pt_id: usize) -> Self {
        SilhouetteEdge { face_id, opp_pt_id }
    }
}

/// The penetration information computed by the EPA algorithm.
///
/// All the points are expressed in the local-space of the first shape.
#[derive(Copy, Clone, Debug)]
pub struct Penetration {
    /// The penetration depth.
    pub depth: Real,
    /// The unit normal of the face of the expanded polytope closest to the origin,
    /// pointing outside of the Minkowski difference. Translating the first shape by
    /// `-normal * depth` brings the two shapes into a touching configuration.
    pub normal: Unit<Vector<Real>>,
    /// The witness point on the first shape.
    pub point1: Point<Real>,
    /// The witness point on the second shape, in the local-space of the first shape.
    pub point2: Point<Real>,
}

/// Results of the EPA algorithm.
#[derive(Copy, Clone, Debug)]
pub enum EpaResult {
    /// The expansion converged within the tolerances.
    Valid(Penetration),
    /// The Minkowski difference has no volume at the origin: the shapes are touching.
    Touching(Penetration),
    /// The polytope exceeded its vertex capacity. The result is the best
    /// (possibly imprecise) penetration found so far.
    OutOfVertices(Penetration),
    /// The polytope exceeded its face capacity. The result is the best
    /// (possibly imprecise) penetration found so far.
    OutOfFaces(Penetration),
    /// The polytope lost its manifoldness due to degenerate geometry. No answer can be
    /// given for this query.
    Degenerate,
    /// The initial simplex could not seed a polytope enclosing the origin.
    Failed,
}

impl EpaResult {
    /// The penetration carried by this result, if any.
    pub fn penetration(self) -> Option<Penetration> {
        match self {
            EpaResult::Valid(pen)
            | EpaResult::Touching(pen)
            | EpaResult::OutOfVertices(pen)
            | EpaResult::OutOfFaces(pen) => Some(pen),
            EpaResult::Degenerate | EpaResult::Failed => None,
        }
    }
}

/// The Expanding Polytope Algorithm.
///
/// Computes the penetration depth, normal, and witness points of two overlapping shapes.
/// It is seeded with the terminal simplex of a GJK execution that reported
/// [`gjk::GjkStatus::Enclosing`], and expands it into a polytope of the Minkowski
/// difference until the face closest to the origin stops moving away from it.
///
/// All the buffers are owned by this solver and have a fixed capacity, so a query never
/// allocates once the solver is created.
pub struct Epa {
    vertices: ArrayVec<CSOPoint, MAX_VERTICES>,
    faces: ArrayVec<Face, MAX_FACES>,
    silhouette: Vec<SilhouetteEdge>,
    heap: BinaryHeap<FaceId>,
}

impl Default for Epa {
    fn default() -> Self {
        Self::new()
    }
}

impl Epa {
    /// Creates a new instance of the EPA algorithm.
    pub fn new() -> Self {
        Epa {
            vertices: ArrayVec::new(),
            faces: ArrayVec::new(),
            silhouette: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.silhouette.clear();
        self.heap.clear();
    }

    /// Computes the penetration of two shapes from a simplex enclosing the origin of
    /// their Minkowski difference.
    pub fn evaluate<G1, G2>(
        &mut self,
        shape: &MinkowskiDiff<G1, G2>,
        simplex: &VoronoiSimplex,
    ) -> EpaResult
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let _eps = crate::math::DEFAULT_EPSILON;
        let _eps_tol = _eps * 100.0;

        self.reset();

        /*
         * Initialization.
         */
        for i in 0..simplex.dimension() + 1 {
            self.vertices.push(*simplex.point(i));
        }

        if simplex.dimension() == 3 {
            let dp1 = self.vertices[1] - self.vertices[0];
            let dp2 = self.vertices[2] - self.vertices[0];
            let dp3 = self.vertices[3] - self.vertices[0];

            if dp1.cross(&dp2).dot(&dp3) > 0.0 {
                self.vertices.swap(1, 2)
            }

            let pts1 = [0, 1, 2];
            let pts2 = [1, 3, 2];
            let pts3 = [0, 2, 3];
            let pts4 = [0, 3, 1];

            let adj1 = [3, 1, 2];
            let adj2 = [3, 2, 0];
            let adj3 = [0, 1, 3];
            let adj4 = [2, 1, 0];

            let (face1, proj_inside1) = Face::new(&self.vertices, pts1, adj1);
            let (face2, proj_inside2) = Face::new(&self.vertices, pts2, adj2);
            let (face3, proj_inside3) = Face::new(&self.vertices, pts3, adj3);
            let (face4, proj_inside4) = Face::new(&self.vertices, pts4, adj4);

            self.faces.push(face1);
            self.faces.push(face2);
            self.faces.push(face3);
            self.faces.push(face4);

            let tetr = Tetrahedron::new(
                self.vertices[0].point,
                self.vertices[1].point,
                self.vertices[2].point,
                self.vertices[3].point,
            );

            if tetr.volume() < gjk::eps_tol() {
                // Flat simplex: the origin lies on the boundary of the Minkowski
                // difference. Report a touching contact along the best face found.
                let proj_inside = [proj_inside1, proj_inside2, proj_inside3, proj_inside4];
                let mut best: Option<(usize, Real)> = None;

                for (i, face) in self.faces.iter().enumerate() {
                    if proj_inside[i] && face.normal.as_ref().norm_squared() != 0.0 {
                        let dist = face.distance(&self.vertices).abs();
                        if best.map(|(_, d)| dist < d).unwrap_or(true) {
                            best = Some((i, dist));
                        }
                    }
                }

                return match best {
                    Some((id, _)) => {
                        let face = &self.faces[id];
                        let (point1, point2) = face.closest_points(&self.vertices);
                        EpaResult::Touching(Penetration {
                            depth: 0.0,
                            normal: face.normal,
                            point1,
                            point2,
                        })
                    }
                    None => {
                        log::debug!("Unable to project the origin on a flat initial simplex.");
                        EpaResult::Failed
                    }
                };
            }

            let mut pushed_one = false;

            for (i, proj_inside) in [proj_inside1, proj_inside2, proj_inside3, proj_inside4]
                .into_iter()
                .enumerate()
            {
                if proj_inside {
                    let dist = self.faces[i].distance(&self.vertices);
                    match FaceId::new(i, -dist) {
                        Some(face_id) => {
                            self.heap.push(face_id);
                            pushed_one = true;
                        }
                        None => return EpaResult::Failed,
                    }
                }
            }

            if !pushed_one {
                log::debug!("Failed to project the origin on the initial simplex.");
                return EpaResult::Failed;
            }
        } else {
            if simplex.dimension() == 0 {
                // Grow the seed vertex into a segment by sampling the supports along the
                // coordinate axes and keeping the one farthest from it.
                let v0 = self.vertices[0];
                let mut best: Option<(CSOPoint, Real)> = None;

                for axis in [
                    Vector::x_axis(),
                    Vector::y_axis(),
                    Vector::z_axis(),
                    -Vector::x_axis(),
                    -Vector::y_axis(),
                    -Vector::z_axis(),
                ] {
                    let w = shape.support_toward(&axis);
                    let sq_dist = (w.point - v0.point).norm_squared();

                    if sq_dist > gjk::eps_tol() && best.map(|(_, d)| sq_dist > d).unwrap_or(true)
                    {
                        best = Some((w, sq_dist));
                    }
                }

                match best {
                    Some((w, _)) => self.vertices.push(w),
                    None => {
                        // The Minkowski difference is reduced to a single point at the
                        // origin: the shapes are touching without any volume.
                        return EpaResult::Touching(Penetration {
                            depth: 0.0,
                            normal: Vector::y_axis(),
                            point1: v0.orig1,
                            point2: v0.orig2,
                        });
                    }
                }
            }

            if self.vertices.len() == 2 {
                let dpt = self.vertices[1] - self.vertices[0];

                Vector::orthonormal_subspace_basis(&[dpt], |dir| {
                    let dir = Unit::new_unchecked(*dir);
                    self.vertices.push(shape.support_toward(&dir));
                    false
                });
            }

            let pts1 = [0, 1, 2];
            let pts2 = [0, 2, 1];

            let adj1 = [1, 1, 1];
            let adj2 = [0, 0, 0];

            let (face1, _) = Face::new(&self.vertices, pts1, adj1);
            let (face2, _) = Face::new(&self.vertices, pts2, adj2);
            self.faces.push(face1);
            self.faces.push(face2);

            match (FaceId::new(0, 0.0), FaceId::new(1, 0.0)) {
                (Some(id1), Some(id2)) => {
                    self.heap.push(id1);
                    self.heap.push(id2);
                }
                _ => return EpaResult::Failed,
            }
        }

        let mut niter = 0;
        let mut max_dist = Real::max_value();
        let mut best_face_id = match self.heap.peek() {
            Some(id) => *id,
            None => return EpaResult::Failed,
        };
        let mut old_dist = 0.0;

        /*
         * Run the expansion.
         */
        while let Some(face_id) = self.heap.pop() {
            // Create new faces.
            let face = self.faces[face_id.id].clone();

            if face.deleted {
                continue;
            }

            if self.vertices.is_full() {
                return EpaResult::OutOfVertices(self.penetration(best_face_id.id));
            }

            let cso_point = shape.support_toward(&face.normal);
            let support_point_id = self.vertices.len();
            self.vertices.push(cso_point);

            let candidate_max_dist = cso_point.point.coords.dot(&face.normal);

            if candidate_max_dist < max_dist {
                best_face_id = face_id;
                max_dist = candidate_max_dist;
            }

            let curr_dist = -face_id.neg_dist;

            if max_dist - curr_dist < _eps_tol ||
                // Accept the current answer if the algorithm is stuck and no new point
                // will be found: a consequence of limited precision.
                ((curr_dist - old_dist).abs() < _eps && candidate_max_dist < max_dist)
            {
                return EpaResult::Valid(self.penetration(best_face_id.id));
            }

            old_dist = curr_dist;

            self.faces[face_id.id].deleted = true;

            let adj_opp_pt_id1 = self.faces[face.adj[0]].next_ccw_pt_id(face.pts[0]);
            let adj_opp_pt_id2 = self.faces[face.adj[1]].next_ccw_pt_id(face.pts[1]);
            let adj_opp_pt_id3 = self.faces[face.adj[2]].next_ccw_pt_id(face.pts[2]);

            self.compute_silhouette(support_point_id, face.adj[0], adj_opp_pt_id1);
            self.compute_silhouette(support_point_id, face.adj[1], adj_opp_pt_id2);
            self.compute_silhouette(support_point_id, face.adj[2], adj_opp_pt_id3);

            if self.silhouette.is_empty() {
                // The expansion failed to extract a silhouette.
                log::debug!("Silhouette extraction failed during polytope expansion.");
                return EpaResult::Degenerate;
            }

            let first_new_face_id = self.faces.len();

            for i in 0..self.silhouette.len() {
                let edge = &self.silhouette[i];

                if !self.faces[edge.face_id].deleted {
                    if self.faces.is_full() {
                        return EpaResult::OutOfFaces(self.penetration(best_face_id.id));
                    }

                    let new_face_id = self.faces.len();

                    let face_adj = &mut self.faces[edge.face_id];
                    let pt_id1 = face_adj.pts[(edge.opp_pt_id + 2) % 3];
                    let pt_id2 = face_adj.pts[(edge.opp_pt_id + 1) % 3];

                    let pts = [pt_id1, pt_id2, support_point_id];
                    let adj = [edge.face_id, new_face_id + 1, new_face_id - 1];

                    face_adj.adj[(edge.opp_pt_id + 1) % 3] = new_face_id;

                    let (new_face, can_project) = Face::new(&self.vertices, pts, adj);
                    self.faces.push(new_face);

                    if can_project {
                        let dist = self.faces[new_face_id].distance(&self.vertices);

                        if dist < curr_dist {
                            // Numerical errors broke the face distance monotonicity.
                            // The popped face is still a plausible answer.
                            return EpaResult::Valid(self.face_penetration(&face));
                        }

                        match FaceId::new(new_face_id, -dist) {
                            Some(fid) => self.heap.push(fid),
                            // The new face drifted behind the origin: drop it and keep
                            // expanding along the other silhouette edges.
                            None => log::debug!("Dropping a drifted face during expansion."),
                        }
                    }
                }
            }

            if first_new_face_id == self.faces.len() {
                // All the silhouette edges belonged to deleted faces.
                log::debug!("Degenerate silhouette: no new face could be created.");
                return EpaResult::Degenerate;
            }

            self.faces[first_new_face_id].adj[2] = self.faces.len() - 1;
            self.faces.last_mut().unwrap().adj[1] = first_new_face_id;

            self.silhouette.clear();

            niter += 1;
            if niter > 100 {
                // The expansion did not converge to the wanted precision. The best face
                // is close enough to be returned as the answer.
                break;
            }
        }

        EpaResult::Valid(self.penetration(best_face_id.id))
    }

    fn penetration(&self, face_id: usize) -> Penetration {
        self.face_penetration(&self.faces[face_id])
    }

    fn face_penetration(&self, face: &Face) -> Penetration {
        let (point1, point2) = face.closest_points(&self.vertices);

        Penetration {
            depth: (point1 - point2).dot(&face.normal),
            normal: face.normal,
            point1,
            point2,
        }
    }

    fn compute_silhouette(&mut self, point: usize, id: usize, opp_pt_id: usize) {
        if !self.faces[id].deleted {
            if !self.faces[id].can_be_seen_by(&self.vertices, point, opp_pt_id) {
                self.silhouette.push(SilhouetteEdge::new(id, opp_pt_id));
            } else {
                self.faces[id].deleted = true;

                let adj_pt_id1 = (opp_pt_id + 2) % 3;
                let adj_pt_id2 = opp_pt_id;

                let adj1 = self.faces[id].adj[adj_pt_id1];
                let adj2 = self.faces[id].adj[adj_pt_id2];

                let adj_opp_pt_id1 =
                    self.faces[adj1].next_ccw_pt_id(self.faces[id].pts[adj_pt_id1]);
                let adj_opp_pt_id2 =
                    self.faces[adj2].next_ccw_pt_id(self.faces[id].pts[adj_pt_id2]);

                self.compute_silhouette(point, adj1, adj_opp_pt_id1);
                self.compute_silhouette(point, adj2, adj_opp_pt_id2);
            }
        }
    }
}
