use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decal_mesh::math::mat4::Mat4;
use decal_mesh::math::vec3::Vec3;
use decal_mesh::weld::weld;
use decal_mesh::{
    build_batch, DecalBuildConfig, DecalMeshBuilder, DecalProjector, ProjectionAxis, SourceMesh,
    SourceModel, Transform,
};

const GRID_SIZES: [usize; 3] = [8, 32, 128];

fn contained_triangle() -> SourceMesh {
    SourceMesh::new(
        "contained",
        vec![
            Vec3::new(-0.25, -0.25, 0.0),
            Vec3::new(0.25, -0.25, 0.0),
            Vec3::new(0.0, 0.25, 0.0),
        ],
        vec![0, 1, 2],
    )
}

fn straddling_triangle() -> SourceMesh {
    SourceMesh::new(
        "straddling",
        vec![
            Vec3::new(-1.0, -1.0, -0.2),
            Vec3::new(1.0, -0.7, 0.3),
            Vec3::new(0.1, 1.2, 0.0),
        ],
        vec![0, 1, 2],
    )
}

fn outside_triangle() -> SourceMesh {
    SourceMesh::new(
        "outside",
        vec![
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::new(2.5, 3.0, 0.0),
        ],
        vec![0, 1, 2],
    )
}

/// An `n` x `n` grid of quads spanning [-1, 1]^2 in the XY plane.
fn grid(n: usize) -> SourceMesh {
    let step = 2.0 / n as f32;
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for row in 0..=n {
        for col in 0..=n {
            vertices.push(Vec3::new(
                -1.0 + col as f32 * step,
                -1.0 + row as f32 * step,
                0.0,
            ));
        }
    }

    let stride = (n + 1) as u32;
    let mut indices = Vec::with_capacity(n * n * 6);
    for row in 0..n as u32 {
        for col in 0..n as u32 {
            let i = row * stride + col;
            indices.extend_from_slice(&[i, i + 1, i + stride + 1, i, i + stride + 1, i + stride]);
        }
    }

    SourceMesh::new("grid", vertices, indices)
}

fn build_once(builder: &mut DecalMeshBuilder, mesh: &SourceMesh) -> usize {
    let identity = Mat4::identity();
    builder.begin(ProjectionAxis::Z, false).unwrap();
    builder.process(&identity, &identity, mesh).unwrap();
    builder
        .end()
        .unwrap()
        .map_or(0, |mesh| mesh.triangle_count())
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");
    let mut builder = DecalMeshBuilder::new();

    for (name, mesh) in [
        ("contained", contained_triangle()),
        ("straddling", straddling_triangle()),
        ("outside", outside_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &mesh, |b, mesh| {
            b.iter(|| build_once(&mut builder, black_box(mesh)));
        });
    }

    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let mut builder = DecalMeshBuilder::new();

    for n in GRID_SIZES {
        let mesh = grid(n);
        group.bench_with_input(BenchmarkId::from_parameter(n * n * 2), &mesh, |b, mesh| {
            b.iter(|| build_once(&mut builder, black_box(mesh)));
        });
    }

    group.finish();
}

fn benchmark_weld(c: &mut Criterion) {
    let mut group = c.benchmark_group("weld");

    for n in GRID_SIZES {
        let mesh = grid(n);
        let soup: Vec<Vec3> = mesh.triangles().unwrap().flatten().collect();
        group.bench_with_input(BenchmarkId::from_parameter(soup.len()), &soup, |b, soup| {
            let mut indices: Vec<u32> = (0..soup.len() as u32).collect();
            b.iter(|| weld(black_box(soup), &mut indices, 1e-4).len());
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let models = [SourceModel::from_meshes("grid", [grid(64)])];

    for count in [1usize, 16, 64] {
        let projectors: Vec<_> = (0..count)
            .map(|i| {
                let offset = (i % 8) as f32 * 0.2 - 0.7;
                let mut transform = Transform::new();
                transform.set_position_xyz(offset, -offset, 0.0).set_scale_uniform(0.5);
                DecalProjector::new(transform, ProjectionAxis::Z)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &projectors,
            |b, projectors| {
                b.iter(|| {
                    build_batch(black_box(projectors), &models, &DecalBuildConfig::default())
                        .unwrap()
                        .len()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_grid,
    benchmark_weld,
    benchmark_batch
);
criterion_main!(benches);
